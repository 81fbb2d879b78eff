//! Command-line argument parsing for the net generator.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, OutputFormat, RotationConfig};

/// Plot a latitude/longitude net and export it as a scene file.
///
/// CLI values override settings loaded from `graticule.ron`.
#[derive(Parser, Debug)]
#[command(name = "graticule", about = "Latitude/longitude net generator")]
pub struct CliArgs {
    /// Latitude calculation step in degrees.
    #[arg(long)]
    pub lat_accuracy: Option<f64>,

    /// Longitude calculation step in degrees.
    #[arg(long)]
    pub lon_accuracy: Option<f64>,

    /// Emit every Nth latitude-index line.
    #[arg(long)]
    pub lat_step: Option<usize>,

    /// Emit every Nth longitude-index line.
    #[arg(long)]
    pub lon_step: Option<usize>,

    /// Rotation offset in degrees as `X,Y,Z`.
    #[arg(long, value_parser = parse_rotation, allow_hyphen_values = true)]
    pub rotation: Option<RotationConfig>,

    /// Uniform scale coefficient.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Output file.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse `X,Y,Z` degrees into a [`RotationConfig`].
pub fn parse_rotation(s: &str) -> Result<RotationConfig, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts[..] else {
        return Err(format!("expected three comma-separated angles, got {s:?}"));
    };
    let angle = |v: &str| {
        v.parse::<f64>()
            .map_err(|e| format!("invalid angle {v:?}: {e}"))
    };
    Ok(RotationConfig {
        x: angle(x)?,
        y: angle(y)?,
        z: angle(z)?,
    })
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(lat) = args.lat_accuracy {
            self.net.accuracy.latitude = lat;
        }
        if let Some(lon) = args.lon_accuracy {
            self.net.accuracy.longitude = lon;
        }
        if let Some(step) = args.lat_step {
            self.net.plot_step.latitude = step;
        }
        if let Some(step) = args.lon_step {
            self.net.plot_step.longitude = step;
        }
        if let Some(rotation) = args.rotation {
            self.net.rotation_offset = rotation;
        }
        if let Some(scale) = args.scale {
            self.net.scale_coefficient = scale;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(format) = args.format {
            self.output.format = format;
            // A format switch without an explicit path keeps the file name.
            if args.output.is_none() {
                self.output.path.set_extension(format.extension());
            }
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            lat_accuracy: None,
            lon_accuracy: None,
            lat_step: None,
            lon_step: None,
            rotation: None,
            scale: None,
            output: None,
            format: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            lat_accuracy: Some(2.0),
            lon_step: Some(10),
            format: Some(OutputFormat::Obj),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.net.accuracy.latitude, 2.0);
        assert_eq!(config.net.plot_step.longitude, 10);
        assert_eq!(config.output.format, OutputFormat::Obj);
        assert_eq!(
            config.output.path,
            PathBuf::from("latitude-longitude-net.obj")
        );
        // Non-overridden fields retain defaults
        assert_eq!(config.net.accuracy.longitude, 1.0);
        assert_eq!(config.net.plot_step.latitude, 5);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_args_from_command_line() {
        let args = CliArgs::try_parse_from([
            "graticule",
            "--lat-accuracy",
            "0.5",
            "--rotation",
            "-90,0,45",
            "--format",
            "obj",
            "-o",
            "net.obj",
        ])
        .unwrap();
        assert_eq!(args.lat_accuracy, Some(0.5));
        assert_eq!(
            args.rotation,
            Some(RotationConfig { x: -90.0, y: 0.0, z: 45.0 })
        );
        assert_eq!(args.format, Some(OutputFormat::Obj));
        assert_eq!(args.output, Some(PathBuf::from("net.obj")));
    }

    #[test]
    fn test_parse_rotation_rejects_wrong_arity() {
        assert!(parse_rotation("1,2").is_err());
        assert!(parse_rotation("1,2,3,4").is_err());
        assert!(parse_rotation("a,b,c").is_err());
        assert_eq!(
            parse_rotation(" 0, -90, 90 ").unwrap(),
            RotationConfig::default()
        );
    }

    #[test]
    fn test_format_override_keeps_explicit_output_path() {
        let mut config = Config::default();
        let args =
            CliArgs::try_parse_from(["graticule", "--format", "obj", "-o", "out/net.txt"]).unwrap();
        config.apply_cli_overrides(&args);
        assert_eq!(config.output.format, OutputFormat::Obj);
        assert_eq!(config.output.path, PathBuf::from("out/net.txt"));
    }

    #[test]
    fn test_format_override_retargets_configured_path() {
        let mut config = Config::default();
        config.output.path = PathBuf::from("nets/earth.obj");
        let args = CliArgs::try_parse_from(["graticule", "--format", "json"]).unwrap();
        config.apply_cli_overrides(&args);
        assert_eq!(config.output.path, PathBuf::from("nets/earth.json"));
    }
}
