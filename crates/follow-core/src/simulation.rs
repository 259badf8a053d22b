//! Deterministic replay of a `Scenario`.
//!
//! Each tick: scripted motion, scripted disposals, scripted shakes, then the
//! controller update. The same scenario and seed always produce the same
//! trajectory.

use followcam_common::{FollowcamError, FollowcamResult, TickClock, TickConfig};
use followcam_scene::{Scenario, Scene, SceneAccess, Transform};
use glam::Vec3;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::controller::{CameraController, TickReport};
use crate::focus::Focus;
use crate::sampler::RngSampler;

/// Upper bound on frames reserved up front; longer runs grow as they go.
const PREALLOC_FRAMES: usize = 4096;

fn frame_capacity(remaining_ticks: u32) -> usize {
    (remaining_ticks as usize).min(PREALLOC_FRAMES)
}

/// One simulated tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u32,
    pub time_scale: f32,
    /// Camera as rendered, shake included.
    pub camera: Transform,
    /// Camera after following, before shake.
    pub clean_camera: Transform,
    pub listener: Option<Vec3>,
    pub focus: Option<Focus>,
    pub pullback: f32,
    pub live_targets: usize,
    pub shake_intensity: f32,
    pub skipped: bool,
}

/// Every frame of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub scenario: String,
    pub seed: u64,
    pub frames: Vec<Frame>,
}

impl Trajectory {
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Highest shake intensity seen.
    pub fn peak_shake(&self) -> f32 {
        self.frames
            .iter()
            .map(|f| f.shake_intensity)
            .fold(0.0_f32, f32::max)
    }

    /// Total distance travelled by the clean camera.
    pub fn camera_travel(&self) -> f32 {
        self.frames
            .windows(2)
            .map(|w| w[0].clean_camera.pos.distance(w[1].clean_camera.pos))
            .sum()
    }

    pub fn to_json(&self) -> FollowcamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs a scenario tick by tick.
pub struct Simulation {
    scenario: Scenario,
    scene: Scene,
    controller: CameraController,
    sampler: RngSampler<StdRng>,
    clock: TickClock,
    tick: u32,
}

impl Simulation {
    /// Build a simulation with the default tick timing.
    pub fn new(scenario: Scenario) -> FollowcamResult<Self> {
        Self::with_tick_config(scenario, TickConfig::default())
    }

    pub fn with_tick_config(scenario: Scenario, tick: TickConfig) -> FollowcamResult<Self> {
        tick.validate()?;
        scenario
            .ensure_valid()
            .map_err(|e| FollowcamError::scenario(e.to_string()))?;

        let mut controller = CameraController::new(scenario.settings.clone())
            .with_targets(scenario.targets.iter().copied());
        controller.set_camera(scenario.camera);
        controller.set_listener(scenario.listener);
        controller.set_shake_target(scenario.shake_target);

        tracing::info!(
            scenario = %scenario.name,
            ticks = scenario.ticks,
            seed = scenario.seed,
            targets = scenario.targets.len(),
            "simulation ready"
        );

        Ok(Self {
            scene: scenario.scene.clone(),
            sampler: RngSampler::seeded(scenario.seed),
            clock: TickClock::new(tick),
            controller,
            scenario,
            tick: 0,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    /// Ticks simulated so far.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.scenario.ticks
    }

    /// Simulate a single tick.
    pub fn step(&mut self) -> Frame {
        let tick = self.tick;
        let time_scale = self.clock.time_scale_for(1.0 / self.scenario.fps);

        for motion in &self.scenario.motions {
            if let Some(transform) = self.scene.transform_mut(motion.object) {
                transform.move_by(motion.velocity * time_scale);
            }
        }
        for disposal in self.scenario.disposals.iter().filter(|d| d.tick == tick) {
            self.scene.dispose(disposal.object);
        }
        for shake in self.scenario.shakes.iter().filter(|s| s.tick == tick) {
            self.controller.shake_screen(shake.strength, shake.hit);
        }

        let report = self
            .controller
            .update(&mut self.scene, &mut self.sampler, time_scale);
        self.tick += 1;
        self.frame(tick, time_scale, &report)
    }

    /// Simulate the remaining ticks and collect the trajectory.
    pub fn run(mut self) -> Trajectory {
        let remaining = self.scenario.ticks.saturating_sub(self.tick);
        let mut frames = Vec::with_capacity(frame_capacity(remaining));
        while !self.is_finished() {
            frames.push(self.step());
        }

        let trajectory = Trajectory {
            scenario: self.scenario.name.clone(),
            seed: self.scenario.seed,
            frames,
        };
        if let Some(last) = trajectory.last() {
            tracing::info!(
                frames = trajectory.frames.len(),
                camera = ?last.clean_camera.pos,
                peak_shake = trajectory.peak_shake(),
                "simulation finished"
            );
        }
        trajectory
    }

    fn frame(&self, tick: u32, time_scale: f32, report: &TickReport) -> Frame {
        let camera = self
            .scenario
            .camera
            .and_then(|id| self.scene.transform(id))
            .unwrap_or_default();
        Frame {
            tick,
            time_scale,
            camera,
            clean_camera: report.camera.unwrap_or(camera),
            listener: report.listener,
            focus: report.focus,
            pullback: report.pullback,
            live_targets: self.controller.targets().len(),
            shake_intensity: report.shake_intensity,
            skipped: report.is_skipped(),
        }
    }
}
