//! Tick timing utilities.
//!
//! Motion in FollowCam is expressed per tick and scaled by a *time scale*:
//! 1.0 means "one tick at the reference frame rate", 2.0 means the frame
//! took twice as long. This module converts wall-clock frame durations into
//! that multiplier.

use std::time::{Duration, Instant};

use crate::config::TickConfig;

/// Converts frame durations into per-tick time scales.
#[derive(Debug, Clone)]
pub struct TickClock {
    config: TickConfig,

    /// The instant of the previous `tick()` call, if any.
    last_tick: Option<Instant>,

    /// Number of ticks produced so far.
    tick_count: u64,
}

impl TickClock {
    /// Create a clock with the given timing configuration.
    pub fn new(config: TickConfig) -> Self {
        Self {
            config,
            last_tick: None,
            tick_count: 0,
        }
    }

    /// Create a clock targeting the given reference frame rate.
    pub fn with_reference_fps(reference_fps: f32) -> Self {
        Self::new(TickConfig {
            reference_fps,
            ..TickConfig::default()
        })
    }

    /// Time scale for a frame that took `elapsed_secs` seconds.
    pub fn time_scale_for(&self, elapsed_secs: f32) -> f32 {
        let raw = elapsed_secs.max(0.0) * self.config.reference_fps;
        raw.clamp(self.config.min_time_scale, self.config.max_time_scale)
    }

    /// Time scale for a frame of the given duration.
    pub fn time_scale_for_duration(&self, elapsed: Duration) -> f32 {
        self.time_scale_for(elapsed.as_secs_f32())
    }

    /// Duration of one tick at the reference frame rate.
    pub fn reference_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.config.reference_fps)
    }

    /// Advance using the real clock and return this tick's time scale.
    ///
    /// The first call has no previous frame to measure against and returns 1.0.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now` and return this tick's time scale.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let scale = match self.last_tick {
            None => 1.0_f32.clamp(self.config.min_time_scale, self.config.max_time_scale),
            Some(last) => self.time_scale_for_duration(now.saturating_duration_since(last)),
        };
        self.last_tick = Some(now);
        self.tick_count += 1;
        scale
    }

    /// Number of ticks produced so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Timing configuration in use.
    pub fn config(&self) -> &TickConfig {
        &self.config
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TickConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_frame_is_unit_scale() {
        let clock = TickClock::default();
        assert!((clock.time_scale_for(1.0 / 60.0) - 1.0).abs() < 1e-5);
        assert!((clock.time_scale_for(1.0 / 30.0) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_time_scale_is_clamped() {
        let clock = TickClock::default();
        // A one-second hitch must not produce a 60x step.
        assert_eq!(clock.time_scale_for(1.0), 2.0);
        assert_eq!(clock.time_scale_for(-0.5), 0.0);
    }

    #[test]
    fn test_tick_at_measures_between_calls() {
        let mut clock = TickClock::with_reference_fps(50.0);
        let start = Instant::now();
        assert_eq!(clock.tick_at(start), 1.0); // first tick is nominal
        let scale = clock.tick_at(start + Duration::from_millis(10));
        assert!((scale - 0.5).abs() < 1e-4);
        assert_eq!(clock.tick_count(), 2);
    }

    #[test]
    fn test_reference_interval() {
        let clock = TickClock::with_reference_fps(50.0);
        assert!((clock.reference_interval().as_secs_f32() - 0.02).abs() < 1e-6);
    }
}
