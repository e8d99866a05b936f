//! Error types for the card stack and configuration

use thiserror::Error;

use crate::card::CardId;

/// Errors surfaced by the card stack store and configuration loading.
///
/// Gesture and animation degenerate inputs never produce errors; they are
/// resolved by policy (zero velocity, no-op removal, latched callbacks).
#[derive(Error, Debug)]
pub enum SwipeError {
    /// A card with this id is already in the stack.
    #[error("Duplicate card: {0}")]
    DuplicateCard(CardId),

    /// No card with this id is tracked.
    #[error("Unknown card: {0}")]
    UnknownCard(CardId),

    /// A configuration value is outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Configuration render error: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SwipeError>;
