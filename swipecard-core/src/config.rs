//! Tunable configuration
//!
//! Every value defaults to the matching entry in [`crate::constants`]. A TOML
//! file may override any subset:
//!
//! ```toml
//! [card]
//! width = 280.0
//!
//! [dismiss]
//! duration_ms = 500
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{Result, SwipeError};

/// Card geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Card width; projections beyond it dismiss.
    pub width: f32,
    /// Card height; folded into the flight distance.
    pub height: f32,
    /// Radius of the card corners.
    pub corner_radius: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: constants::card::WIDTH,
            height: constants::card::HEIGHT,
            corner_radius: constants::card::CORNER_RADIUS,
        }
    }
}

/// Fan presentation of the cards behind the front one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    /// Lateral offset per position behind the front.
    pub spacing: f32,
    /// Scale lost per position behind the front, in `[0, 1)`.
    pub scale_falloff: f32,
    /// Re-layout duration after the stack changes.
    pub transition_ms: u64,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            spacing: constants::fan::SPACING,
            scale_falloff: constants::fan::SCALE_FALLOFF,
            transition_ms: constants::fan::TRANSITION_MS,
        }
    }
}

impl FanConfig {
    /// [`Self::transition_ms`] as a [`Duration`].
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Fling-out keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismissConfig {
    /// Length of the whole keyframe curve.
    pub duration_ms: u64,
    /// Flight cap in card widths.
    pub max_fling_factor: f32,
    /// How far past rest the card tucks on the way back.
    pub overshoot: f32,
    /// Time from the tuck back to rest.
    pub tail_trim_ms: u64,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            duration_ms: constants::dismiss::DURATION_MS,
            max_fling_factor: constants::dismiss::MAX_FLING_FACTOR,
            overshoot: constants::dismiss::OVERSHOOT,
            tail_trim_ms: constants::dismiss::TAIL_TRIM_MS,
        }
    }
}

/// Pointer tracking and fling projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Exponential decay friction in 1/s.
    pub decay_friction: f32,
    /// Samples older than this are ignored for release velocity.
    pub velocity_horizon_ms: u64,
    /// A longer gap between samples means the pointer had stopped.
    pub assume_stopped_ms: u64,
    /// Release velocity clamp, px/s.
    pub max_velocity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            decay_friction: constants::gesture::DECAY_FRICTION,
            velocity_horizon_ms: constants::gesture::VELOCITY_HORIZON_MS,
            assume_stopped_ms: constants::gesture::ASSUME_STOPPED_MS,
            max_velocity: constants::gesture::MAX_VELOCITY,
        }
    }
}

/// Snap-back spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    /// Spring stiffness.
    pub stiffness: f32,
    /// 1.0 is critically damped.
    pub damping_ratio: f32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            stiffness: constants::settle::STIFFNESS,
            damping_ratio: constants::settle::DAMPING_RATIO,
        }
    }
}

/// Complete widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// `[card]`
    pub card: CardConfig,
    /// `[fan]`
    pub fan: FanConfig,
    /// `[dismiss]`
    pub dismiss: DismissConfig,
    /// `[gesture]`
    pub gesture: GestureConfig,
    /// `[settle]`
    pub settle: SettleConfig,
}

impl SwipeConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded swipe configuration");
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reject values the animation math cannot work with.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SwipeError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        }

        positive("card.width", self.card.width)?;
        positive("card.height", self.card.height)?;
        positive("dismiss.max_fling_factor", self.dismiss.max_fling_factor)?;
        positive("gesture.decay_friction", self.gesture.decay_friction)?;
        positive("gesture.max_velocity", self.gesture.max_velocity)?;
        positive("settle.stiffness", self.settle.stiffness)?;
        positive("settle.damping_ratio", self.settle.damping_ratio)?;

        if !(0.0..1.0).contains(&self.fan.scale_falloff) {
            return Err(SwipeError::InvalidConfig(format!(
                "fan.scale_falloff must be in [0, 1), got {}",
                self.fan.scale_falloff
            )));
        }
        if self.fan.spacing < 0.0 || !self.fan.spacing.is_finite() {
            return Err(SwipeError::InvalidConfig(format!(
                "fan.spacing must not be negative, got {}",
                self.fan.spacing
            )));
        }
        if self.dismiss.duration_ms == 0 {
            return Err(SwipeError::InvalidConfig(
                "dismiss.duration_ms must be greater than zero".into(),
            ));
        }
        // The tuck keyframe sits after the outbound apex at half the duration.
        if self.dismiss.tail_trim_ms >= self.dismiss.duration_ms / 2 {
            return Err(SwipeError::InvalidConfig(format!(
                "dismiss.tail_trim_ms ({}) must be shorter than half of dismiss.duration_ms ({})",
                self.dismiss.tail_trim_ms, self.dismiss.duration_ms
            )));
        }
        if self.gesture.velocity_horizon_ms == 0 {
            return Err(SwipeError::InvalidConfig(
                "gesture.velocity_horizon_ms must be greater than zero".into(),
            ));
        }
        // A zero gap treats every pause between samples as a stop.
        if self.gesture.assume_stopped_ms == 0 {
            return Err(SwipeError::InvalidConfig(
                "gesture.assume_stopped_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SwipeConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.card.width, 320.0);
        assert_eq!(config.dismiss.duration_ms, 600);
        assert_eq!(config.dismiss.tail_trim_ms, 70);
        assert_eq!(config.fan.spacing, 12.0);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = SwipeConfig::from_toml_str(
            r#"
            [card]
            width = 280.0

            [dismiss]
            overshoot = 24.0
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.card.width, 280.0);
        assert_eq!(config.card.height, 360.0);
        assert_eq!(config.dismiss.overshoot, 24.0);
        assert_eq!(config.dismiss.duration_ms, 600);
        assert_eq!(config.gesture, GestureConfig::default());
    }

    #[test]
    fn rejects_tail_longer_than_half_duration() {
        let err = SwipeConfig::from_toml_str(
            r#"
            [dismiss]
            duration_ms = 100
            tail_trim_ms = 70
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SwipeError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_assume_stopped() {
        let err = SwipeConfig::from_toml_str("[gesture]\nassume_stopped_ms = 0\n").unwrap_err();
        assert!(matches!(err, SwipeError::InvalidConfig(_)));
        assert!(err.to_string().contains("gesture.assume_stopped_ms"));
    }

    #[test]
    fn rejects_non_positive_width() {
        let err = SwipeConfig::from_toml_str("[card]\nwidth = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("card.width"));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = SwipeConfig::from_toml_str("[card\nwidth = ").unwrap_err();
        assert!(matches!(err, SwipeError::ConfigParse(_)));
    }

    #[test]
    fn renders_and_reparses() {
        let mut config = SwipeConfig::default();
        config.fan.spacing = 16.0;
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(SwipeConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swipecard.toml");
        std::fs::write(&path, "[fan]\nscale_falloff = 0.1\n").unwrap();
        let config = SwipeConfig::load(&path).unwrap();
        assert_eq!(config.fan.scale_falloff, 0.1);

        let missing = SwipeConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, SwipeError::Io(_)));
    }
}
