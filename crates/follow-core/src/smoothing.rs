//! Exponential approach used for camera motion and shake decay.
//!
//! Each tick closes a fraction of the remaining gap. At a time scale of 1
//! that fraction is the per-tick `rate`; how other time scales are handled
//! depends on the `SmoothingMode`.

use followcam_scene::SmoothingMode;
use glam::Vec3;

/// Fraction of the remaining gap closed in one tick, in `[0, 1]`.
pub fn step_factor(rate: f32, time_scale: f32, mode: SmoothingMode) -> f32 {
    let rate = rate.clamp(0.0, 1.0);
    let time_scale = time_scale.max(0.0);
    match mode {
        // Clamped so very long frames land on the target instead of overshooting.
        SmoothingMode::Legacy => (rate * time_scale).clamp(0.0, 1.0),
        SmoothingMode::Exact => 1.0 - (1.0 - rate).powf(time_scale),
    }
}

/// Per-tick approach rate for a smoothness exponent: `0.1 * 2^-smoothness`.
pub fn approach_rate(smoothness: f32) -> f32 {
    0.1 * 2.0_f32.powf(-smoothness.max(0.0))
}

/// Drives a position toward a desired position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingModel {
    pub smoothness: f32,
    pub mode: SmoothingMode,
}

impl SmoothingModel {
    pub fn new(smoothness: f32, mode: SmoothingMode) -> Self {
        Self { smoothness, mode }
    }

    /// Per-tick velocity toward `desired`.
    pub fn velocity(&self, current: Vec3, desired: Vec3) -> Vec3 {
        (desired - current) * approach_rate(self.smoothness)
    }

    /// Displacement to apply this tick.
    pub fn step(&self, current: Vec3, desired: Vec3, time_scale: f32) -> Vec3 {
        (desired - current) * step_factor(approach_rate(self.smoothness), time_scale, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rate_halves_per_unit_smoothness() {
        assert!((approach_rate(0.0) - 0.1).abs() < 1e-7);
        assert!((approach_rate(1.0) - 0.05).abs() < 1e-7);
        assert!((approach_rate(2.0) - 0.025).abs() < 1e-7);
    }

    #[test]
    fn test_single_tick_matches_velocity() {
        let model = SmoothingModel::new(1.0, SmoothingMode::Legacy);
        let desired = Vec3::new(100.0, 0.0, -500.0);
        let step = model.step(Vec3::ZERO, desired, 1.0);
        assert!((step - model.velocity(Vec3::ZERO, desired)).length() < 1e-4);
        assert!((step - Vec3::new(5.0, 0.0, -25.0)).length() < 1e-4);
    }

    #[test]
    fn test_modes_agree_at_unit_time_scale() {
        for rate in [0.0, 0.05, 0.2, 1.0] {
            let legacy = step_factor(rate, 1.0, SmoothingMode::Legacy);
            let exact = step_factor(rate, 1.0, SmoothingMode::Exact);
            assert!((legacy - exact).abs() < 1e-6);
        }
    }

    #[test]
    fn test_exact_mode_is_frame_rate_independent() {
        // Two half ticks must cover the same ground as one full tick.
        let rate = 0.2;
        let half = step_factor(rate, 0.5, SmoothingMode::Exact);
        let full = step_factor(rate, 1.0, SmoothingMode::Exact);
        let remaining_after_halves = (1.0 - half) * (1.0 - half);
        assert!((remaining_after_halves - (1.0 - full)).abs() < 1e-6);
    }

    #[test]
    fn test_legacy_step_is_clamped() {
        assert_eq!(step_factor(0.2, 10.0, SmoothingMode::Legacy), 1.0);
        assert_eq!(step_factor(0.2, -1.0, SmoothingMode::Legacy), 0.0);
    }

    fn mode_strategy() -> impl Strategy<Value = SmoothingMode> {
        prop_oneof![Just(SmoothingMode::Legacy), Just(SmoothingMode::Exact)]
    }

    proptest! {
        #[test]
        fn converges_to_stationary_target(
            smoothness in 0.0f32..4.0,
            time_scale in 0.25f32..2.0,
            tx in -1000.0f32..1000.0,
            ty in -1000.0f32..1000.0,
            mode in mode_strategy(),
        ) {
            let model = SmoothingModel::new(smoothness, mode);
            let factor = step_factor(approach_rate(smoothness), time_scale, mode);
            let target = Vec3::new(tx, ty, -500.0);
            let initial = target.length();
            let mut pos = Vec3::ZERO;
            let mut dist = initial;

            let ticks = 50;
            for _ in 0..ticks {
                pos += model.step(pos, target, time_scale);
                let next = pos.distance(target);
                // Far from the target every tick must make real progress.
                if dist > 1.0 {
                    prop_assert!(next < dist, "{next} !< {dist}");
                } else {
                    prop_assert!(next <= dist + 1e-3);
                }
                dist = next;
            }

            // Geometric decay: the gap shrinks by (1 - factor) per tick.
            let bound = initial * (1.0 - factor).powi(ticks);
            prop_assert!(dist <= bound * 1.001 + 1e-2, "{dist} > {bound}");
        }
    }
}
