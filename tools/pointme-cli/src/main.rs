//! PointMe CLI — Command-line interface for frame-log workflows.
//!
//! Usage:
//!   pointme record <PATH>      Generate a synthetic frame log
//!   pointme replay <PATH>      Run a frame log through the pipeline
//!   pointme info <PATH>        Show frame-log information
//!   pointme check              Show resolved configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "pointme",
    about = "Hand-gesture pointer control from landmark streams",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic frame log (scripted hand motion)
    Record {
        /// Output file path
        path: PathBuf,

        /// Motion script: sweep | clicks | mixed
        #[arg(long, default_value = "mixed")]
        script: String,

        /// Number of frames to generate
        #[arg(long, default_value = "300")]
        frames: usize,

        /// Detector frame rate (Hz)
        #[arg(long, default_value = "30")]
        fps: u32,

        /// Screen width recorded in the header
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Screen height recorded in the header
        #[arg(long, default_value = "1080")]
        height: u32,
    },

    /// Run a frame log through the gesture pipeline
    Replay {
        /// Path to the frame log
        path: PathBuf,

        /// Pointer mode: absolute | relative
        #[arg(long, default_value = "absolute")]
        mode: String,

        /// Print every pointer command, not just gesture events
        #[arg(long)]
        show_pointer: bool,

        /// Immediately re-enable tracking after a pause event
        #[arg(long)]
        auto_resume: bool,

        /// Filter minimum cutoff frequency (Hz)
        #[arg(long, default_value = "1.0")]
        min_cutoff: f64,

        /// Filter speed coefficient
        #[arg(long, default_value = "0.0")]
        beta: f64,
    },

    /// Show frame-log information
    Info {
        /// Path to the frame log
        path: PathBuf,
    },

    /// Show resolved configuration and defaults
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    pointme_common::logging::init_logging(&pointme_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Record {
            path,
            script,
            frames,
            fps,
            width,
            height,
        } => commands::record::run(path, script, frames, fps, width, height),
        Commands::Replay {
            path,
            mode,
            show_pointer,
            auto_resume,
            min_cutoff,
            beta,
        } => commands::replay::run(path, mode, show_pointer, auto_resume, min_cutoff, beta),
        Commands::Info { path } => commands::info::run(path),
        Commands::Check => commands::check::run(),
    }
}
