//! Show scenario information.

use std::path::PathBuf;

use followcam_scene::{ObjectId, Scenario};

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let scenario =
        Scenario::load(&path).map_err(|e| anyhow::anyhow!("Failed to load scenario: {e}"))?;

    println!("Scenario: {}", scenario.name);
    if !scenario.description.is_empty() {
        println!("  {}", scenario.description);
    }
    println!(
        "  Ticks: {} @ {}fps (seed {})",
        scenario.ticks, scenario.fps, scenario.seed
    );
    println!();

    let label = |id: Option<ObjectId>| match id {
        Some(id) => match scenario.scene.get(id) {
            Some(obj) => format!("{} ({id})", obj.name),
            None => format!("missing ({id})"),
        },
        None => "none".to_string(),
    };

    println!("Wiring:");
    println!("  Camera: {}", label(scenario.camera));
    println!("  Listener: {}", label(scenario.listener));
    println!("  Shake target: {}", label(scenario.shake_target));
    println!();

    println!("Objects:");
    for obj in scenario.scene.objects() {
        let mut tags = vec![];
        if obj.camera.is_some() {
            tags.push("camera");
        }
        if scenario.targets.contains(&obj.id) {
            tags.push("target");
        }
        if obj.disposed {
            tags.push("disposed");
        }
        let p = obj.transform.pos;
        println!(
            "  {} {:<16} ({:.1}, {:.1}, {:.1}) {}",
            obj.id,
            obj.name,
            p.x,
            p.y,
            p.z,
            tags.join(", ")
        );
    }
    println!();

    let s = &scenario.settings;
    println!("Settings:");
    println!("  Smoothness: {}", s.smoothness);
    println!(
        "  Zoom out: scale {} beyond {} units, max {}",
        s.zoom_out_scale, s.zoom_threshold, s.max_zoom_out_dist
    );
    println!(
        "  Shake: decay {}/tick, falloff {} units, amplitude {} / {}°",
        s.shake_decay_rate,
        s.shake_falloff_distance,
        s.shake_offset_amplitude,
        s.shake_angle_amplitude_deg
    );
    println!("  Smoothing mode: {:?}", s.smoothing_mode);
    println!();

    println!("Script:");
    println!("  Motions: {}", scenario.motions.len());
    println!("  Shakes: {}", scenario.shakes.len());
    println!("  Disposals: {}", scenario.disposals.len());

    Ok(())
}
