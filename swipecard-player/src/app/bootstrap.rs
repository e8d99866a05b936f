use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use iced::Task;
use swipecard_core::SwipeConfig;
use swipecard_core::constants::DEFAULT_DECK;

use crate::messages::Message;
use crate::state::State;

/// Path of an optional TOML file overriding [`SwipeConfig`] defaults.
pub const CONFIG_ENV: &str = "SWIPECARD_CONFIG";
/// Comma separated card colors; the first entry is the front card.
pub const DECK_ENV: &str = "SWIPECARD_DECK";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub swipe: SwipeConfig,
    pub deck: Vec<u32>,
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(swipe: SwipeConfig) -> Self {
        Self {
            swipe,
            deck: DEFAULT_DECK.to_vec(),
            config_path: None,
        }
    }

    /// Read configuration from the environment. Invalid values are logged
    /// and replaced by defaults; the player always starts.
    pub fn from_environment() -> Self {
        let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        let swipe = match config_path.as_deref() {
            Some(path) => load_swipe_config(path).unwrap_or_else(|err| {
                log::warn!("{err:#}; falling back to built-in defaults");
                SwipeConfig::default()
            }),
            None => SwipeConfig::default(),
        };

        let deck = match std::env::var(DECK_ENV) {
            Ok(raw) => parse_deck(&raw).unwrap_or_else(|err| {
                log::warn!("Ignoring {DECK_ENV}: {err:#}");
                DEFAULT_DECK.to_vec()
            }),
            Err(_) => DEFAULT_DECK.to_vec(),
        };

        Self {
            swipe,
            deck,
            config_path,
        }
    }

    pub fn with_deck(mut self, deck: Vec<u32>) -> Self {
        self.deck = deck;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

/// Load and validate a swipe configuration file.
pub fn load_swipe_config(path: &Path) -> anyhow::Result<SwipeConfig> {
    let config = SwipeConfig::load(path)
        .with_context(|| format!("Failed to load swipe config from {}", path.display()))?;
    log::info!("Loaded swipe config from {}", path.display());
    Ok(config)
}

/// Parse a deck like `"#90caf9, fafafa, 0xffef9a9a"`. Six digit colors are
/// made opaque.
pub fn parse_deck(raw: &str) -> anyhow::Result<Vec<u32>> {
    let deck = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_color)
        .collect::<anyhow::Result<Vec<_>>>()?;

    if deck.is_empty() {
        bail!("deck must contain at least one color");
    }
    Ok(deck)
}

fn parse_color(entry: &str) -> anyhow::Result<u32> {
    let digits = entry
        .strip_prefix('#')
        .or_else(|| entry.strip_prefix("0x"))
        .or_else(|| entry.strip_prefix("0X"))
        .unwrap_or(entry);

    let value = u32::from_str_radix(digits, 16)
        .with_context(|| format!("invalid color {entry:?}"))?;

    match digits.len() {
        6 => Ok(0xff00_0000 | value),
        8 => Ok(value),
        _ => bail!("color {entry:?} must have 6 or 8 hex digits"),
    }
}

/// Initial state for the iced runtime.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let state = State::new(config);
    log::debug!(
        "Booted with {} cards (config file: {:?})",
        state.stack.len(),
        config.config_path
    );
    (state, Task::none())
}
