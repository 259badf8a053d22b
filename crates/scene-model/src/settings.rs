//! Tunables for the follow camera.

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// How per-tick exponential approaches are scaled by the time scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// `step = rate * time_scale`. Matches the classic per-frame feel but
    /// is only a first-order approximation when frame times vary.
    #[default]
    Legacy,
    /// `step = 1 - (1 - rate)^time_scale`. Frame-rate independent, and
    /// identical to `Legacy` at a time scale of 1.
    Exact,
}

/// Settings for one follow camera controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowSettings {
    /// Exponent controlling how sluggishly the camera chases its target.
    /// Each unit halves the per-tick approach rate.
    pub smoothness: f32,

    /// How much extra pull-back per unit of target spread beyond the
    /// zoom threshold.
    pub zoom_out_scale: f32,

    /// Hard cap on the extra pull-back distance.
    pub max_zoom_out_dist: f32,

    /// Target spread below which the camera does not zoom out at all.
    pub zoom_threshold: f32,

    /// Distance at which a shake hit is attenuated to half strength.
    pub shake_falloff_distance: f32,

    /// Fraction of shake intensity lost per reference tick.
    pub shake_decay_rate: f32,

    /// Positional shake amplitude at intensity 1.
    pub shake_offset_amplitude: f32,

    /// Rotational shake amplitude at intensity 1, in degrees.
    pub shake_angle_amplitude_deg: f32,

    pub smoothing_mode: SmoothingMode,
}

impl FollowSettings {
    pub const DEFAULT_ZOOM_THRESHOLD: f32 = 200.0;
    pub const DEFAULT_SHAKE_FALLOFF: f32 = 350.0;
    pub const DEFAULT_SHAKE_DECAY: f32 = 0.2;
    pub const DEFAULT_SHAKE_OFFSET: f32 = 100.0;
    pub const DEFAULT_SHAKE_ANGLE_DEG: f32 = 5.0;

    /// Reject negative or non-finite values.
    pub fn validate(&self) -> Result<(), SceneError> {
        let fields = [
            ("smoothness", self.smoothness),
            ("zoom_out_scale", self.zoom_out_scale),
            ("max_zoom_out_dist", self.max_zoom_out_dist),
            ("zoom_threshold", self.zoom_threshold),
            ("shake_falloff_distance", self.shake_falloff_distance),
            ("shake_decay_rate", self.shake_decay_rate),
            ("shake_offset_amplitude", self.shake_offset_amplitude),
            ("shake_angle_amplitude_deg", self.shake_angle_amplitude_deg),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::validation(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if self.shake_falloff_distance == 0.0 {
            return Err(SceneError::validation(
                "shake_falloff_distance must be greater than zero",
            ));
        }
        if self.shake_decay_rate > 1.0 {
            return Err(SceneError::validation(format!(
                "shake_decay_rate must be at most 1.0, got {}",
                self.shake_decay_rate
            )));
        }
        Ok(())
    }
}

impl Default for FollowSettings {
    fn default() -> Self {
        Self {
            smoothness: 1.0,
            zoom_out_scale: 1.0,
            max_zoom_out_dist: 500.0,
            zoom_threshold: Self::DEFAULT_ZOOM_THRESHOLD,
            shake_falloff_distance: Self::DEFAULT_SHAKE_FALLOFF,
            shake_decay_rate: Self::DEFAULT_SHAKE_DECAY,
            shake_offset_amplitude: Self::DEFAULT_SHAKE_OFFSET,
            shake_angle_amplitude_deg: Self::DEFAULT_SHAKE_ANGLE_DEG,
            smoothing_mode: SmoothingMode::Legacy,
        }
    }
}
