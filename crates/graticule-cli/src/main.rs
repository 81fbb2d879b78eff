//! `graticule`: plot a latitude/longitude net and export it as a scene file.
//!
//! Loads `graticule.ron` from the config directory (creating it with defaults
//! on first run), applies CLI overrides, then runs "Plot Net": calculate the
//! grid, emit the retained lines into a scene, and write the scene to disk.
//!
//! Run with: `cargo run -p graticule-cli -- --lat-step 10 --format obj`

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use graticule_config::{CliArgs, Config, default_config_dir};
use graticule_net::{ExportError, NetPlotter, PlotError, SceneBuilder, write_scene};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("plot produced no scene")]
    EmptyScene,
}

/// Calculate, plot and export the net described by `config`.
fn plot_net(config: &Config) -> Result<(), AppError> {
    let plotter = NetPlotter::from_config(config);
    let mut builder = SceneBuilder::new();
    let summary = plotter.plot(&mut builder)?;
    let scene = builder.finish().ok_or(AppError::EmptyScene)?;

    write_scene(&scene, &config.output.path, config.output.format)?;
    info!(
        "{} -> {} ({} latitude lines, {} longitude lines, {} points)",
        summary.group_name,
        config.output.path.display(),
        summary.latitude_lines,
        summary.longitude_lines,
        summary.points,
    );
    Ok(())
}

fn load_config(config_dir: &Path) -> Config {
    Config::load_or_create(config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    })
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = load_config(&config_dir);
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    graticule_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match plot_net(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Plot Net failed: {e}");
            ExitCode::FAILURE
        }
    }
}
