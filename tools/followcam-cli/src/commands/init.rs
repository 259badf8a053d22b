//! Write a sample scenario.

use std::path::PathBuf;

use followcam_scene::Scenario;

pub fn run(path: PathBuf, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let scenario = Scenario::sample();
    scenario
        .save(&path)
        .map_err(|e| anyhow::anyhow!("Failed to write scenario: {e}"))?;

    println!("Sample scenario written to: {}", path.display());
    println!("  Objects: {}", scenario.scene.len());
    println!("  Targets: {}", scenario.targets.len());
    println!("  Ticks: {} @ {}fps", scenario.ticks, scenario.fps);
    println!("\nRun it with: followcam simulate {}", path.display());

    Ok(())
}
