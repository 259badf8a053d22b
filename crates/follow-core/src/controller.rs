//! The follow camera controller.
//!
//! # Tick
//!
//! 1. **Resolve** camera and listener. Missing either makes the tick a no-op.
//! 2. **Undo** last tick's shake so the camera transform is clean.
//! 3. **Prune** follow targets that no longer resolve.
//! 4. **Follow**: aggregate the focus, derive the desired position from the
//!    zoom policy, and step the camera toward it. No targets, no motion.
//! 5. **Listener**: move the listener over the clean camera position.
//! 6. **Shake**: decay, sample, and apply a fresh perturbation.
//!
//! Steps 2 → 4 → 6 must stay in that order or shake and follow motion
//! corrupt each other.

use followcam_scene::{FollowSettings, ObjectId, SceneAccess, Transform};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::focus::{prune_targets, target_positions, Focus};
use crate::listener::sync_listener;
use crate::sampler::ShakeSampler;
use crate::shake::{ShakeParams, ShakeState};
use crate::smoothing::SmoothingModel;
use crate::zoom::ZoomPolicy;

/// Why a tick did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No camera object assigned.
    NoCamera,
    /// No listener object assigned.
    NoListener,
    /// The camera object is gone or has no camera component.
    CameraUnavailable,
    /// The listener object is gone.
    ListenerUnavailable,
}

/// Outcome of one `update`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub skipped: Option<SkipReason>,
    /// Focus of this tick, `None` when there were no live targets.
    pub focus: Option<Focus>,
    pub pullback: f32,
    pub pruned: usize,
    /// Camera transform after following, before shake. `None` when skipped.
    pub camera: Option<Transform>,
    pub listener: Option<Vec3>,
    pub shake_intensity: f32,
    pub shake_offset: Vec3,
    pub shake_angle: f32,
}

impl TickReport {
    fn skipped(reason: SkipReason, shake_intensity: f32) -> Self {
        Self {
            skipped: Some(reason),
            focus: None,
            pullback: 0.0,
            pruned: 0,
            camera: None,
            listener: None,
            shake_intensity,
            shake_offset: Vec3::ZERO,
            shake_angle: 0.0,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }
}

/// Keeps a camera framed on a set of targets.
///
/// Holds only handles to scene objects; the host owns them and may destroy
/// them at any time.
#[derive(Debug, Clone)]
pub struct CameraController {
    settings: FollowSettings,
    camera: Option<ObjectId>,
    listener: Option<ObjectId>,
    shake_target: Option<ObjectId>,
    targets: Vec<ObjectId>,
    shake: ShakeState,
    last_focus: Option<Focus>,
}

impl CameraController {
    pub fn new(settings: FollowSettings) -> Self {
        let mut controller = Self {
            settings: FollowSettings::default(),
            camera: None,
            listener: None,
            shake_target: None,
            targets: Vec::new(),
            shake: ShakeState::default(),
            last_focus: None,
        };
        controller.set_settings(settings);
        controller
    }

    pub fn with_camera(mut self, camera: ObjectId) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn with_listener(mut self, listener: ObjectId) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = ObjectId>) -> Self {
        self.set_targets(Some(targets.into_iter().collect()));
        self
    }

    pub fn settings(&self) -> &FollowSettings {
        &self.settings
    }

    /// Replace all settings. Negative values are clamped to zero.
    pub fn set_settings(&mut self, settings: FollowSettings) {
        self.settings = settings;
        self.set_smoothness(self.settings.smoothness);
        self.set_zoom_out_scale(self.settings.zoom_out_scale);
        self.set_max_zoom_out_dist(self.settings.max_zoom_out_dist);
    }

    pub fn smoothness(&self) -> f32 {
        self.settings.smoothness
    }

    pub fn set_smoothness(&mut self, value: f32) {
        self.settings.smoothness = value.max(0.0);
    }

    pub fn zoom_out_scale(&self) -> f32 {
        self.settings.zoom_out_scale
    }

    pub fn set_zoom_out_scale(&mut self, value: f32) {
        self.settings.zoom_out_scale = value.max(0.0);
    }

    pub fn max_zoom_out_dist(&self) -> f32 {
        self.settings.max_zoom_out_dist
    }

    pub fn set_max_zoom_out_dist(&mut self, value: f32) {
        self.settings.max_zoom_out_dist = value.max(0.0);
    }

    pub fn camera(&self) -> Option<ObjectId> {
        self.camera
    }

    pub fn set_camera(&mut self, camera: Option<ObjectId>) {
        self.camera = camera;
    }

    pub fn listener(&self) -> Option<ObjectId> {
        self.listener
    }

    pub fn set_listener(&mut self, listener: Option<ObjectId>) {
        self.listener = listener;
    }

    /// Object that receives the shake instead of the camera, typically a
    /// child offset transform the camera hangs from.
    pub fn shake_target(&self) -> Option<ObjectId> {
        self.shake_target
    }

    pub fn set_shake_target(&mut self, target: Option<ObjectId>) {
        self.shake_target = target;
    }

    pub fn targets(&self) -> &[ObjectId] {
        &self.targets
    }

    /// Replace the follow targets. `None` clears them.
    pub fn set_targets(&mut self, targets: Option<Vec<ObjectId>>) {
        let mut targets = targets.unwrap_or_default();
        let mut seen = std::collections::HashSet::new();
        targets.retain(|id| seen.insert(*id));
        self.targets = targets;
    }

    /// Add a target unless it is already followed.
    pub fn add_target(&mut self, target: ObjectId) -> bool {
        if self.targets.contains(&target) {
            return false;
        }
        self.targets.push(target);
        true
    }

    pub fn remove_target(&mut self, target: ObjectId) -> bool {
        let before = self.targets.len();
        self.targets.retain(|id| *id != target);
        self.targets.len() != before
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Focus computed on the most recent tick that had live targets.
    pub fn last_focus(&self) -> Option<Focus> {
        self.last_focus
    }

    pub fn shake_state(&self) -> &ShakeState {
        &self.shake
    }

    pub fn shake_intensity(&self) -> f32 {
        self.shake.intensity
    }

    /// Start or strengthen the screen shake.
    ///
    /// With a `hit` position the strength falls off with the hit's distance
    /// from the last known focus point.
    pub fn shake_screen(&mut self, strength: f32, hit: Option<Vec3>) {
        let params = ShakeParams::from_settings(&self.settings);
        let focus = self.last_focus.map(|f| f.pos);
        let added = self.shake.trigger(&params, strength, hit, focus);
        tracing::debug!(
            strength,
            added,
            intensity = self.shake.intensity,
            "screen shake triggered"
        );
    }

    /// Run one tick. `time_scale` is 1.0 for a frame at the reference rate.
    pub fn update<S, R>(&mut self, scene: &mut S, sampler: &mut R, time_scale: f32) -> TickReport
    where
        S: SceneAccess + ?Sized,
        R: ShakeSampler + ?Sized,
    {
        let Some(camera_id) = self.camera else {
            return TickReport::skipped(SkipReason::NoCamera, self.shake.intensity);
        };
        let Some(listener_id) = self.listener else {
            return TickReport::skipped(SkipReason::NoListener, self.shake.intensity);
        };
        let Some(camera) = scene.camera(camera_id) else {
            tracing::trace!(camera = %camera_id, "camera unavailable, skipping tick");
            return TickReport::skipped(SkipReason::CameraUnavailable, self.shake.intensity);
        };
        if !scene.is_alive(listener_id) {
            tracing::trace!(listener = %listener_id, "listener unavailable, skipping tick");
            return TickReport::skipped(SkipReason::ListenerUnavailable, self.shake.intensity);
        }

        self.shake.undo(scene);

        let pruned = prune_targets(&mut self.targets, scene);
        let focus = Focus::from_positions(&target_positions(&self.targets, scene));

        let mut pullback = 0.0;
        if let Some(focus) = focus {
            let zoom = ZoomPolicy::from_settings(&self.settings);
            pullback = zoom.pullback(focus.radius);
            let desired = focus.pos + zoom.offset(camera.focus_distance, focus.radius);

            let model = SmoothingModel::new(self.settings.smoothness, self.settings.smoothing_mode);
            if let Some(transform) = scene.transform_mut(camera_id) {
                let delta = model.step(transform.pos, desired, time_scale);
                transform.move_by(delta);
            }
            self.last_focus = Some(focus);
            tracing::trace!(
                focus = ?focus.pos,
                radius = focus.radius,
                pullback,
                desired = ?desired,
                "follow step"
            );
        }

        let clean = scene.transform(camera_id).unwrap_or_default();
        let listener = sync_listener(scene, listener_id, clean.pos);

        let params = ShakeParams::from_settings(&self.settings);
        self.shake.decay(&params, time_scale);
        let (offset, angle) = self.shake.sample(&params, sampler);
        let shake_object = self
            .shake_target
            .filter(|id| self.is_offset_object(*id, camera_id, listener_id))
            .filter(|id| scene.is_alive(*id));
        match shake_object {
            Some(id) => self.shake.apply(scene, id, false, offset, angle),
            None => self.shake.apply(scene, camera_id, true, offset, angle),
        };

        tracing::debug!(
            targets = self.targets.len(),
            pruned,
            camera = ?clean.pos,
            shake = self.shake.intensity,
            "camera tick"
        );

        TickReport {
            skipped: None,
            focus,
            pullback,
            pruned,
            camera: Some(clean),
            listener,
            shake_intensity: self.shake.intensity,
            shake_offset: offset,
            shake_angle: angle,
        }
    }

    /// Whether `id` may receive the shake absolutely. The camera, listener
    /// and follow targets hold poses this controller reads, so they never do.
    fn is_offset_object(&self, id: ObjectId, camera: ObjectId, listener: ObjectId) -> bool {
        id != camera && id != listener && !self.targets.contains(&id)
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(FollowSettings::default())
    }
}
