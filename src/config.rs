//! Controller tuning loaded from JSON.
//!
//! Every field is optional in the file; omitted fields take the defaults from
//! [`crate::constants`]. Loaded configs are validated before use.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::jump::{CurveError, Keyframe, KeyframeCurve};
use crate::{
    DEFAULT_CRITICAL_VERTICALITY, DEFAULT_DROP_SPEED, DEFAULT_GROUNDED_THRESHOLD,
    DEFAULT_JUMP_DELAY, DEFAULT_JUMP_KEYS, DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED,
};

/// Failures while loading or validating a [`PlatformerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A scalar tunable is outside its allowed range.
    #[error("{field} = {value} is out of range ({expected})")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Value found in the config.
        value: f32,
        /// Human readable description of the accepted range.
        expected: &'static str,
    },
    /// The jump curve keys are invalid.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Tunables for [`PlatformerController`](crate::controller::PlatformerController).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    /// Horizontal walking speed while grounded, units per second.
    pub move_speed: f32,
    /// Minimum up component of a contact normal that grounds the body.
    pub grounded_threshold: f32,
    /// In-air rotation speed at full input, degrees per second.
    pub turn_speed: f32,
    /// Raw vertical direction component while dropping.
    pub drop_speed: f32,
    /// Verticality at which vertical direction follows current velocity.
    pub critical_verticality: f32,
    /// Seconds between jump starts.
    pub jump_delay: f32,
    /// Jump arc keys, strictly increasing in time.
    pub jump_curve: Vec<Keyframe>,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            grounded_threshold: DEFAULT_GROUNDED_THRESHOLD,
            turn_speed: DEFAULT_TURN_SPEED,
            drop_speed: DEFAULT_DROP_SPEED,
            critical_verticality: DEFAULT_CRITICAL_VERTICALITY,
            jump_delay: DEFAULT_JUMP_DELAY,
            jump_curve: DEFAULT_JUMP_KEYS.into_iter().map(Keyframe::from).collect(),
        }
    }
}

fn check(
    field: &'static str,
    value: f32,
    expected: &'static str,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

impl PlatformerConfig {
    /// Parses and validates a config from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and the
    /// [`validate`](Self::validate) errors for bad values.
    ///
    /// # Examples
    /// ```
    /// use drakewalk::config::PlatformerConfig;
    /// let config = PlatformerConfig::from_json_str(r#"{ "move_speed": 6.5 }"#)?;
    /// assert_eq!(config.move_speed, 6.5);
    /// assert_eq!(config.turn_speed, drakewalk::DEFAULT_TURN_SPEED);
    /// # Ok::<(), drakewalk::config::ConfigError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        match Self::from_json_str(&text) {
            Ok(config) => {
                info!("loaded platformer config from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("rejected platformer config {}: {e}", path.display());
                Err(e)
            }
        }
    }

    /// Checks every tunable is finite and in range and the curve is valid.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("move_speed", self.move_speed, ">= 0", |v| v >= 0.0)?;
        check(
            "grounded_threshold",
            self.grounded_threshold,
            "-1..=1",
            |v| (-1.0..=1.0).contains(&v),
        )?;
        check("turn_speed", self.turn_speed, ">= 0", |v| v >= 0.0)?;
        check("drop_speed", self.drop_speed, "finite", |_| true)?;
        check(
            "critical_verticality",
            self.critical_verticality,
            "0..=1",
            |v| (0.0..=1.0).contains(&v),
        )?;
        check("jump_delay", self.jump_delay, ">= 0", |v| v >= 0.0)?;
        self.curve()?;
        Ok(())
    }

    /// Builds the jump curve from the configured keys.
    ///
    /// # Errors
    /// Returns [`ConfigError::Curve`] when the keys are invalid.
    pub fn curve(&self) -> Result<KeyframeCurve, ConfigError> {
        Ok(KeyframeCurve::new(self.jump_curve.clone())?)
    }

    /// Serialises the config as pretty JSON.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if serialisation fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlatformerConfig::default().validate().is_ok());
    }

    #[test]
    fn serialised_defaults_parse_back() {
        let config = PlatformerConfig::default();
        let json = config
            .to_json_string()
            .unwrap_or_else(|e| panic!("serialise: {e}"));
        let parsed =
            PlatformerConfig::from_json_str(&json).unwrap_or_else(|e| panic!("parse: {e}"));
        assert_eq!(parsed, config);
    }
}
