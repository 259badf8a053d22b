//! Zoom policy: how far the camera stands off from the focus point.
//!
//! The camera backs away as targets spread, with a dead zone so small
//! spreads don't zoom at all and a cap so it never recedes indefinitely.

use followcam_scene::FollowSettings;
use glam::Vec3;

/// Pull-back parameters, copied out of `FollowSettings`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPolicy {
    pub zoom_out_scale: f32,
    pub max_zoom_out_dist: f32,
    pub zoom_threshold: f32,
}

impl ZoomPolicy {
    pub fn from_settings(settings: &FollowSettings) -> Self {
        Self {
            zoom_out_scale: settings.zoom_out_scale,
            max_zoom_out_dist: settings.max_zoom_out_dist,
            zoom_threshold: settings.zoom_threshold,
        }
    }

    /// Extra distance beyond the camera's focus distance, in `[0, max_zoom_out_dist]`.
    pub fn pullback(&self, focus_radius: f32) -> f32 {
        let excess = (focus_radius - self.zoom_threshold).max(0.0);
        (self.zoom_out_scale * excess).clamp(0.0, self.max_zoom_out_dist.max(0.0))
    }

    /// Offset from the focus point to the desired camera position.
    /// The camera looks down +Z, so it backs off along -Z.
    pub fn offset(&self, focus_distance: f32, focus_radius: f32) -> Vec3 {
        Vec3::new(0.0, 0.0, -(focus_distance + self.pullback(focus_radius)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn policy(scale: f32, max: f32) -> ZoomPolicy {
        ZoomPolicy {
            zoom_out_scale: scale,
            max_zoom_out_dist: max,
            zoom_threshold: 200.0,
        }
    }

    #[test]
    fn test_dead_zone() {
        let p = policy(2.0, 1000.0);
        assert_eq!(p.pullback(0.0), 0.0);
        assert_eq!(p.pullback(200.0), 0.0);
        assert_eq!(p.pullback(250.0), 100.0);
    }

    #[test]
    fn test_capped() {
        let p = policy(2.0, 300.0);
        assert_eq!(p.pullback(10_000.0), 300.0);
    }

    #[test]
    fn test_offset_points_backwards() {
        let p = policy(1.0, 500.0);
        assert_eq!(p.offset(500.0, 0.0), Vec3::new(0.0, 0.0, -500.0));
        assert_eq!(p.offset(500.0, 300.0), Vec3::new(0.0, 0.0, -600.0));
    }

    #[test]
    fn test_from_settings() {
        let p = ZoomPolicy::from_settings(&FollowSettings::default());
        assert_eq!(p.zoom_threshold, 200.0);
        assert_eq!(p.max_zoom_out_dist, 500.0);
    }

    proptest! {
        #[test]
        fn pullback_is_bounded(
            scale in 0.0f32..10.0,
            max in 0.0f32..2000.0,
            radius in 0.0f32..100_000.0,
        ) {
            let pb = policy(scale, max).pullback(radius);
            prop_assert!(pb >= 0.0);
            prop_assert!(pb <= max);
        }

        #[test]
        fn pullback_is_monotonic(
            scale in 0.0f32..10.0,
            max in 0.0f32..2000.0,
            a in 0.0f32..5000.0,
            b in 0.0f32..5000.0,
        ) {
            let p = policy(scale, max);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(p.pullback(lo) <= p.pullback(hi));
        }
    }
}
