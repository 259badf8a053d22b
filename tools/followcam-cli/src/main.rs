//! FollowCam CLI — Command-line interface for camera scenarios.
//!
//! Usage:
//!   followcam init <PATH>          Write a sample scenario
//!   followcam validate <PATH>      Validate a scenario file
//!   followcam info <PATH>          Show scenario information
//!   followcam simulate <PATH>      Run a scenario and report the camera path

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "followcam",
    about = "Simulate a smoothed, shaking follow camera over scripted scenes",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an application config file (defaults to the XDG location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample scenario to get started
    Init {
        /// Where to write the scenario
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a scenario file
    Validate {
        /// Path to the scenario file
        path: PathBuf,
    },

    /// Show scenario information
    Info {
        /// Path to the scenario file
        path: PathBuf,
    },

    /// Run a scenario through the follow camera
    Simulate {
        /// Path to the scenario file
        path: PathBuf,

        /// Override the number of ticks
        #[arg(long)]
        ticks: Option<u32>,

        /// Override the shake seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the simulated frame rate
        #[arg(long)]
        fps: Option<f32>,

        /// Print a summary line every N ticks (0 = only the final state)
        #[arg(long, default_value = "60")]
        every: u32,

        /// Write the full trajectory as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => followcam_common::AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?,
        None => followcam_common::AppConfig::load(),
    };

    let mut logging = app_config.logging.clone();
    if cli.verbose {
        logging.level = followcam_common::logging::logging_for_verbosity(true).level;
    }
    followcam_common::logging::init_logging(&logging)?;

    match cli.command {
        Commands::Init { path, force } => commands::init::run(path, force),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Info { path } => commands::info::run(path),
        Commands::Simulate {
            path,
            ticks,
            seed,
            fps,
            every,
            output,
        } => commands::simulate::run(
            path,
            commands::simulate::Overrides { ticks, seed, fps },
            every,
            output,
            app_config.tick,
        ),
    }
}
