//! Configuration for the latitude/longitude net generator.
//!
//! Settings persist to disk as a RON file, accept CLI overrides via clap, and
//! tolerate missing or unknown fields so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, parse_rotation};
pub use config::{
    AccuracyConfig, CONFIG_FILE_NAME, Config, DebugConfig, LinePrefabConfig, LineRendererConfig,
    NetConfig, OutputConfig, OutputFormat, PlotStepConfig, RotationConfig, default_config_dir,
};
pub use error::ConfigError;
