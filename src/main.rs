//! Hand gesture recognition runner: replays recorded hand landmarks and
//! prints the recognized gesture and movement labels per frame.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hand_gesture_recognition::{
    app::{AppConfig, RecognitionApp},
    cli::Args,
    config::{Config, EXAMPLE_CONFIG},
};
use log::info;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Recognition");

    // Load configuration if provided
    let mut settings = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(format) = args.format {
        settings.output.format = format;
    }
    if args.skip_idle {
        settings.output.skip_idle = true;
    }

    let recording = args.recording.context("No recording given")?;
    let config = AppConfig {
        recording: PathBuf::from(recording),
        output: args.output.map(PathBuf::from),
        settings,
    };

    // Create and run application
    let mut app = RecognitionApp::new(config)?;
    app.run()?;

    Ok(())
}
