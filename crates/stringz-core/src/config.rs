//! Runtime scene configuration.
//!
//! Defaults come from [`crate::constants`]; hosts may override individual
//! fields (the web front-end reads `data-*` attributes on the canvas) and
//! must call [`SceneConfig::validate`] before handing the config to a scene.

use crate::constants::{
    GLOW_INTERVAL_MS, MAX_GUITARS, MAX_NOTES, MAX_STICKMEN, SPAWN_INTERVAL_MS,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive, finite number of milliseconds (got {value})")]
    Interval { name: &'static str, value: f64 },

    #[error("{name} must be at least 1")]
    Cap { name: &'static str },

    #[error("unknown config key `{0}`")]
    UnknownKey(String),

    #[error("invalid value for `{key}`: {value:?}")]
    Parse { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub spawn_interval_ms: f64,
    pub glow_interval_ms: f64,
    pub max_guitars: usize,
    pub max_notes: usize,
    pub max_stickmen: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            glow_interval_ms: GLOW_INTERVAL_MS,
            max_guitars: MAX_GUITARS,
            max_notes: MAX_NOTES,
            max_stickmen: MAX_STICKMEN,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_interval("spawn_interval_ms", self.spawn_interval_ms)?;
        check_interval("glow_interval_ms", self.glow_interval_ms)?;
        check_cap("max_guitars", self.max_guitars)?;
        check_cap("max_notes", self.max_notes)?;
        check_cap("max_stickmen", self.max_stickmen)?;
        Ok(())
    }

    /// Apply a single textual override, e.g. from a `data-spawn-interval-ms`
    /// attribute. Keys use the attribute spelling without the `data-` prefix.
    /// The value is parsed but not range-checked; call `validate` afterwards.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parse_err = || ConfigError::Parse {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "spawn-interval-ms" => {
                self.spawn_interval_ms = value.parse().map_err(|_| parse_err())?
            }
            "glow-interval-ms" => self.glow_interval_ms = value.parse().map_err(|_| parse_err())?,
            "max-guitars" => self.max_guitars = value.parse().map_err(|_| parse_err())?,
            "max-notes" => self.max_notes = value.parse().map_err(|_| parse_err())?,
            "max-stickmen" => self.max_stickmen = value.parse().map_err(|_| parse_err())?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// Override keys understood by [`SceneConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 5] = [
    "spawn-interval-ms",
    "glow-interval-ms",
    "max-guitars",
    "max-notes",
    "max-stickmen",
];

fn check_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Interval { name, value })
    }
}

fn check_cap(name: &'static str, value: usize) -> Result<(), ConfigError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ConfigError::Cap { name })
    }
}
