//! Validate a scenario file.

use std::path::PathBuf;

use followcam_scene::Scenario;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating scenario at: {}", path.display());

    let scenario =
        Scenario::load(&path).map_err(|e| anyhow::anyhow!("Failed to load scenario: {e}"))?;

    println!("  Name: {}", scenario.name);
    println!("  Objects: {}", scenario.scene.len());
    println!("  Follow targets: {}", scenario.targets.len());

    let errors = scenario.validate();
    if errors.is_empty() {
        println!("\nScenario is valid.");
        Ok(())
    } else {
        println!("\nValidation issues:");
        for error in &errors {
            println!("  - {error}");
        }
        anyhow::bail!("{} issue(s) found", errors.len())
    }
}
