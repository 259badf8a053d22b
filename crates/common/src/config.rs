//! Application configuration.
//!
//! Per-controller follow settings live with the scene data model
//! (`followcam_scene::FollowSettings`); this module only covers
//! process-wide concerns: logging and how ticks are timed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{FollowcamError, FollowcamResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Tick timing configuration.
    pub tick: TickConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "followcam_core=trace,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

/// How wall-clock frame durations map onto the per-tick time scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    /// Frame rate at which one tick has a time scale of exactly 1.0.
    pub reference_fps: f32,

    /// Lower clamp for the time scale.
    pub min_time_scale: f32,

    /// Upper clamp for the time scale. Keeps the smoothing step factor
    /// below 1 after long frame hitches.
    pub max_time_scale: f32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            reference_fps: 60.0,
            min_time_scale: 0.0,
            max_time_scale: 2.0,
        }
    }
}

impl TickConfig {
    /// Reject settings the tick clock cannot work with.
    pub fn validate(&self) -> FollowcamResult<()> {
        if !self.reference_fps.is_finite() || self.reference_fps <= 0.0 {
            return Err(FollowcamError::config(format!(
                "reference_fps must be a positive number, got {}",
                self.reference_fps
            )));
        }
        if !self.min_time_scale.is_finite()
            || !self.max_time_scale.is_finite()
            || self.min_time_scale < 0.0
            || self.min_time_scale > self.max_time_scale
        {
            return Err(FollowcamError::config(format!(
                "time scale range [{}, {}] is invalid",
                self.min_time_scale, self.max_time_scale
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &std::path::Path) -> FollowcamResult<Self> {
        if !path.exists() {
            return Err(FollowcamError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.tick.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> FollowcamResult<()> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        Ok(())
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("followcam").join("config.json")
}
