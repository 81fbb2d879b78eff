//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "graticule.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid sampling, plotting and placement settings.
    pub net: NetConfig,
    /// Template used for every emitted line. `None` means no template was chosen.
    pub line_prefab: Option<LinePrefabConfig>,
    /// Where and how the plotted net is written.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Net geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetConfig {
    /// Calculation step in degrees.
    pub accuracy: AccuracyConfig,
    /// Plot step in sample-index units.
    pub plot_step: PlotStepConfig,
    /// Rotation applied to every point, remapping z-up into the scene's axes.
    pub rotation_offset: RotationConfig,
    /// Uniform scale applied to every point.
    pub scale_coefficient: f64,
    /// Radius of the reference sphere.
    pub base_radius: f64,
    /// Extra radius so the net sits a little above the sphere surface.
    pub vertical_offset: f64,
}

/// Angular spacing between samples, in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccuracyConfig {
    pub latitude: f64,
    pub longitude: f64,
}

/// Stride between emitted lines, in sample-index units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlotStepConfig {
    pub latitude: usize,
    pub longitude: usize,
}

/// Rotation angles in degrees, applied about X, then Y, then Z.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Line template handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinePrefabConfig {
    /// Template name, copied into exported scenes.
    pub name: String,
    /// Line rendering settings. A template without them cannot draw lines.
    pub renderer: Option<LineRendererConfig>,
}

/// Line rendering settings of a template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LineRendererConfig {
    /// Line width in scene units.
    pub width: f32,
    /// Linear RGBA color.
    pub color: [f32; 4],
    /// Connect the last point back to the first.
    pub loop_closed: bool,
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file for the plotted net.
    pub path: PathBuf,
    /// File format.
    pub format: OutputFormat,
}

/// Supported scene file formats.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, clap::ValueEnum,
)]
pub enum OutputFormat {
    /// serde_json dump of the scene graph.
    #[default]
    Json,
    /// Wavefront OBJ with one `l` polyline per line.
    Obj,
}

impl OutputFormat {
    /// Conventional file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Obj => "obj",
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to `<config dir>/logs` in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for Config {
    fn default() -> Self {
        Self {
            net: NetConfig::default(),
            line_prefab: Some(LinePrefabConfig::default()),
            output: OutputConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            accuracy: AccuracyConfig::default(),
            plot_step: PlotStepConfig::default(),
            rotation_offset: RotationConfig::default(),
            scale_coefficient: 0.01,
            base_radius: 6371.0,
            vertical_offset: 12.0,
        }
    }
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self {
            latitude: 1.0,
            longitude: 1.0,
        }
    }
}

impl Default for PlotStepConfig {
    fn default() -> Self {
        Self {
            latitude: 5,
            longitude: 5,
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: -90.0,
            z: 90.0,
        }
    }
}

impl Default for LinePrefabConfig {
    fn default() -> Self {
        Self {
            name: "Coordinate Line".to_string(),
            renderer: Some(LineRendererConfig::default()),
        }
    }
}

impl Default for LineRendererConfig {
    fn default() -> Self {
        Self {
            width: 0.05,
            color: [1.0, 1.0, 1.0, 0.5],
            loop_closed: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("latitude-longitude-net.json"),
            format: OutputFormat::Json,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Platform config directory for graticule, or `./.graticule` when the
/// platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("graticule"))
        .unwrap_or_else(|| PathBuf::from(".graticule"))
}

// --- Load / Save ---

/// RON layout used for `graticule.ron`: nested sections expanded, short
/// arrays such as colors kept on one line.
fn pretty_ron() -> ron::ser::PrettyConfig {
    ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .separate_tuple_members(true)
        .enumerate_arrays(false)
}

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Parse a config file. Missing sections fall back to their defaults.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `graticule.ron` from `config_dir`; on first run write the defaults
    /// there and return them.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::file_path(config_dir);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("No net settings found, wrote defaults to {}", path.display());
            return Ok(config);
        }

        let config = Self::read_from(&path)?;
        log::info!("Loaded net settings from {}", path.display());
        Ok(config)
    }

    /// Write the config to `config_dir/graticule.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let path = Self::file_path(config_dir);
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.clone(),
            source,
        };

        let serialized = ron::ser::to_string_pretty(self, pretty_ron())?;
        std::fs::create_dir_all(config_dir).map_err(write_err)?;
        std::fs::write(&path, serialized).map_err(write_err)?;
        Ok(())
    }
}
