//! Screen shake: a decaying random perturbation layered on the camera.
//!
//! The shake is additive. Whatever was applied last tick is removed before
//! the camera is moved again, so it never leaks into the smoothed position.
//! Per tick, in order: `undo`, (camera motion happens), `decay`, `sample`,
//! `apply`.

use followcam_scene::{FollowSettings, ObjectId, SceneAccess, SmoothingMode};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sampler::ShakeSampler;
use crate::smoothing::step_factor;

/// Shake amplitudes and decay, copied out of `FollowSettings`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeParams {
    pub falloff_distance: f32,
    pub decay_rate: f32,
    pub offset_amplitude: f32,
    /// Radians at intensity 1.
    pub angle_amplitude: f32,
    pub mode: SmoothingMode,
}

impl ShakeParams {
    pub fn from_settings(settings: &FollowSettings) -> Self {
        Self {
            falloff_distance: settings.shake_falloff_distance,
            decay_rate: settings.shake_decay_rate,
            offset_amplitude: settings.shake_offset_amplitude,
            angle_amplitude: settings.shake_angle_amplitude_deg.to_radians(),
            mode: settings.smoothing_mode,
        }
    }
}

impl Default for ShakeParams {
    fn default() -> Self {
        Self::from_settings(&FollowSettings::default())
    }
}

/// Current shake intensity and what was last applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShakeState {
    /// Never negative.
    pub intensity: f32,
    pub last_offset: Vec3,
    pub last_angle: f32,
    /// Object the last offset was written to.
    pub applied_to: Option<ObjectId>,
}

impl ShakeState {
    /// Add shake. With a hit position and a known focus point the strength
    /// falls off with distance: `1 / (1 + distance / falloff)`.
    ///
    /// Intensity is not capped; callers firing many strong hits in a row
    /// get a violently shaking camera. Returns the intensity actually added.
    pub fn trigger(
        &mut self,
        params: &ShakeParams,
        strength: f32,
        hit: Option<Vec3>,
        focus: Option<Vec3>,
    ) -> f32 {
        let distance_factor = match (hit, focus) {
            (Some(hit), Some(focus)) if params.falloff_distance > 0.0 => {
                1.0 / (1.0 + hit.distance(focus) / params.falloff_distance)
            }
            _ => 1.0,
        };
        let added = strength * distance_factor;
        self.intensity = (self.intensity + added).max(0.0);
        added
    }

    /// Remove the previously applied perturbation from whichever object
    /// received it. A vanished object simply drops it.
    pub fn undo<S: SceneAccess + ?Sized>(&mut self, scene: &mut S) {
        if let Some(id) = self.applied_to.take() {
            if let Some(transform) = scene.transform_mut(id) {
                transform.move_by(-self.last_offset);
                transform.turn_by(-self.last_angle);
            }
        }
        self.last_offset = Vec3::ZERO;
        self.last_angle = 0.0;
    }

    /// Move intensity toward zero.
    pub fn decay(&mut self, params: &ShakeParams, time_scale: f32) {
        let factor = step_factor(params.decay_rate, time_scale, params.mode);
        self.intensity = (self.intensity - self.intensity * factor).max(0.0);
    }

    /// Draw this tick's offset and angle.
    pub fn sample<R: ShakeSampler + ?Sized>(&self, params: &ShakeParams, sampler: &mut R) -> (Vec3, f32) {
        if self.intensity <= 0.0 {
            return (Vec3::ZERO, 0.0);
        }
        let offset = sampler.unit_cube() * params.offset_amplitude * self.intensity;
        let angle = sampler.signed_unit() * params.angle_amplitude * self.intensity;
        (offset, angle)
    }

    /// Write a sampled perturbation to `target` and remember it.
    ///
    /// `additive` targets (the camera itself) are nudged by the offset; a
    /// dedicated offset transform is set absolutely instead. Either way the
    /// next `undo` restores it.
    pub fn apply<S: SceneAccess + ?Sized>(
        &mut self,
        scene: &mut S,
        target: ObjectId,
        additive: bool,
        offset: Vec3,
        angle: f32,
    ) -> bool {
        let Some(transform) = scene.transform_mut(target) else {
            return false;
        };
        if additive {
            transform.move_by(offset);
            transform.turn_by(angle);
        } else {
            transform.move_to(offset);
            transform.turn_to(angle);
        }
        self.last_offset = offset;
        self.last_angle = angle;
        self.applied_to = Some(target);
        true
    }
}
