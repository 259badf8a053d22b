//! Run a scenario through the follow camera.

use std::path::PathBuf;

use followcam_common::TickConfig;
use followcam_core::{Simulation, Trajectory};
use followcam_scene::Scenario;
use serde::Serialize;

/// Command-line overrides for scenario fields.
pub struct Overrides {
    pub ticks: Option<u32>,
    pub seed: Option<u64>,
    pub fps: Option<f32>,
}

/// Trajectory file written by `--output`.
#[derive(Serialize)]
struct TrajectoryFile<'a> {
    generated_at: String,
    source: String,
    #[serde(flatten)]
    trajectory: &'a Trajectory,
}

pub fn run(
    path: PathBuf,
    overrides: Overrides,
    every: u32,
    output: Option<PathBuf>,
    tick: TickConfig,
) -> anyhow::Result<()> {
    let mut scenario =
        Scenario::load(&path).map_err(|e| anyhow::anyhow!("Failed to load scenario: {e}"))?;

    if let Some(ticks) = overrides.ticks {
        scenario.ticks = ticks;
    }
    if let Some(seed) = overrides.seed {
        scenario.seed = seed;
    }
    if let Some(fps) = overrides.fps {
        scenario.fps = fps;
    }

    println!(
        "Simulating '{}' for {} ticks @ {}fps (seed {})",
        scenario.name, scenario.ticks, scenario.fps, scenario.seed
    );

    let sim = Simulation::with_tick_config(scenario, tick)
        .map_err(|e| anyhow::anyhow!("Cannot simulate: {e}"))?;
    let trajectory = sim.run();

    if every > 0 {
        for frame in trajectory.frames.iter().filter(|f| f.tick % every == 0) {
            let p = frame.clean_camera.pos;
            println!(
                "  t={:<5} camera=({:>8.2}, {:>8.2}, {:>8.2}) targets={} pullback={:>6.1} shake={:.3}",
                frame.tick, p.x, p.y, p.z, frame.live_targets, frame.pullback, frame.shake_intensity
            );
        }
    }

    match trajectory.last() {
        Some(last) => {
            let p = last.clean_camera.pos;
            println!("\nFinal camera: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
            if let Some(focus) = last.focus {
                println!(
                    "  Focus: ({:.2}, {:.2}, {:.2}), radius {:.1}",
                    focus.pos.x, focus.pos.y, focus.pos.z, focus.radius
                );
            }
            println!("  Camera travel: {:.1}", trajectory.camera_travel());
            println!("  Peak shake: {:.3}", trajectory.peak_shake());
            let skipped = trajectory.frames.iter().filter(|f| f.skipped).count();
            if skipped > 0 {
                println!("  Skipped ticks: {skipped}");
            }
        }
        None => println!("\nNo ticks simulated."),
    }

    if let Some(output) = output {
        let file = TrajectoryFile {
            generated_at: chrono::Utc::now().to_rfc3339(),
            source: path.display().to_string(),
            trajectory: &trajectory,
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(&output, json)?;
        println!("\nTrajectory written to: {}", output.display());
        tracing::debug!(path = %output.display(), frames = trajectory.frames.len(), "trajectory saved");
    }

    Ok(())
}
