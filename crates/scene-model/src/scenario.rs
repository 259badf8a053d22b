//! Scenario files: a scene, the controller wiring, and scripted events.
//!
//! Scenarios drive deterministic simulations of the follow camera, both
//! from the CLI and from golden tests.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::object::{Camera, ObjectId, Transform};
use crate::scene::{Scene, SceneAccess};
use crate::settings::FollowSettings;

/// A complete, replayable camera scenario (`*.scenario.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name.
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub scene: Scene,

    /// Object carrying the camera component.
    pub camera: Option<ObjectId>,

    /// Object standing in for the audio listener.
    pub listener: Option<ObjectId>,

    /// Optional child transform that receives the shake instead of the camera.
    #[serde(default)]
    pub shake_target: Option<ObjectId>,

    #[serde(default)]
    pub targets: Vec<ObjectId>,

    #[serde(default)]
    pub settings: FollowSettings,

    /// Constant per-tick velocities applied to objects before each update.
    #[serde(default)]
    pub motions: Vec<ObjectMotion>,

    #[serde(default)]
    pub shakes: Vec<ScheduledShake>,

    #[serde(default)]
    pub disposals: Vec<ScheduledDisposal>,

    /// Number of ticks to simulate.
    #[serde(default = "default_ticks")]
    pub ticks: u32,

    /// Seed for the shake sampler.
    #[serde(default)]
    pub seed: u64,

    /// Simulated frame rate.
    #[serde(default = "default_fps")]
    pub fps: f32,
}

/// Moves an object by `velocity` (units per reference tick) every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectMotion {
    pub object: ObjectId,
    pub velocity: Vec3,
}

/// A shake trigger fired just before the update of `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledShake {
    pub tick: u32,
    pub strength: f32,
    #[serde(default)]
    pub hit: Option<Vec3>,
}

/// Destroys an object just before the update of `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledDisposal {
    pub tick: u32,
    pub object: ObjectId,
}

fn default_ticks() -> u32 {
    300
}

fn default_fps() -> f32 {
    60.0
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SceneError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| SceneError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the scenario as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SceneError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| SceneError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| SceneError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check wiring and settings. Returns every problem found.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = vec![];

        if let Err(e) = self.settings.validate() {
            errors.push(e.to_string());
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            errors.push(format!("fps must be positive, got {}", self.fps));
        }

        match self.camera {
            None => errors.push("no camera object configured".to_string()),
            Some(id) if self.scene.get(id).is_none() => {
                errors.push(format!("camera object {id} does not exist"))
            }
            Some(id) if self.scene.camera(id).is_none() => {
                errors.push(format!("camera object {id} has no camera component"))
            }
            Some(_) => {}
        }

        match self.listener {
            None => errors.push("no listener object configured".to_string()),
            Some(id) if self.scene.get(id).is_none() => {
                errors.push(format!("listener object {id} does not exist"))
            }
            Some(_) => {}
        }

        if let Some(id) = self.shake_target {
            if self.scene.get(id).is_none() {
                errors.push(format!("shake target {id} does not exist"));
            } else if Some(id) == self.camera || Some(id) == self.listener {
                errors.push(format!(
                    "shake target {id} must be its own object, not the camera or listener"
                ));
            } else if self.targets.contains(&id) {
                errors.push(format!("shake target {id} is also a follow target"));
            }
        }

        let mut check_ref = |id: ObjectId, label: &str| {
            if self.scene.get(id).is_none() {
                errors.push(format!("{label} references unknown object {id}"));
            }
        };
        for id in &self.targets {
            check_ref(*id, "follow target");
        }
        for motion in &self.motions {
            check_ref(motion.object, "motion");
        }
        for disposal in &self.disposals {
            check_ref(disposal.object, "disposal");
        }

        for shake in &self.shakes {
            if !shake.strength.is_finite() {
                errors.push(format!("shake at tick {} has invalid strength", shake.tick));
            }
        }

        errors
    }

    /// Like `validate`, folded into a single error.
    pub fn ensure_valid(&self) -> Result<(), SceneError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SceneError::validation(errors.join("; ")))
        }
    }

    /// A small two-player scene with a spreading target and a couple of hits.
    pub fn sample() -> Self {
        let mut scene = Scene::new();
        let camera = scene.spawn_camera("camera", Transform::IDENTITY, Camera::default());
        let listener = scene.spawn("listener", Transform::from_pos(Vec3::new(0.0, 0.0, -50.0)));
        let player_one = scene.spawn("player_one", Transform::from_pos(Vec3::new(-100.0, 0.0, 0.0)));
        let player_two = scene.spawn("player_two", Transform::from_pos(Vec3::new(100.0, 50.0, 0.0)));
        let pickup = scene.spawn("pickup", Transform::from_pos(Vec3::new(0.0, 200.0, 0.0)));

        Self {
            name: "sample".to_string(),
            description: "Two players drifting apart while the camera zooms out".to_string(),
            scene,
            camera: Some(camera),
            listener: Some(listener),
            shake_target: None,
            targets: vec![player_one, player_two, pickup],
            settings: FollowSettings::default(),
            motions: vec![
                ObjectMotion {
                    object: player_one,
                    velocity: Vec3::new(-2.0, 0.0, 0.0),
                },
                ObjectMotion {
                    object: player_two,
                    velocity: Vec3::new(2.0, 0.5, 0.0),
                },
            ],
            shakes: vec![
                ScheduledShake {
                    tick: 30,
                    strength: 1.0,
                    hit: Some(Vec3::new(-160.0, 0.0, 0.0)),
                },
                ScheduledShake {
                    tick: 120,
                    strength: 0.5,
                    hit: None,
                },
            ],
            disposals: vec![ScheduledDisposal {
                tick: 60,
                object: pickup,
            }],
            ticks: default_ticks(),
            seed: 7,
            fps: default_fps(),
        }
    }
}
