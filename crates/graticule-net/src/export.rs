//! Scene export as JSON or Wavefront OBJ polylines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use graticule_config::OutputFormat;
use tracing::info;

use crate::error::ExportError;
use crate::scene::NetScene;

/// Write `scene` to `writer` in the given format.
pub fn export_scene<W: Write>(
    scene: &NetScene,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), ExportError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, scene)?;
            writeln!(writer)?;
        }
        OutputFormat::Obj => write_obj(scene, writer)?,
    }
    Ok(())
}

/// Write `scene` to the file at `path`, creating parent directories as needed.
pub fn write_scene(scene: &NetScene, path: &Path, format: OutputFormat) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    export_scene(scene, format, &mut writer)?;
    writer.flush()?;

    info!(
        path = %path.display(),
        ?format,
        lines = scene.lines.len(),
        "wrote scene"
    );
    Ok(())
}

/// OBJ object names cannot contain whitespace.
fn obj_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// One `o` block per line: its vertices followed by a single `l` statement.
/// Vertex indices are 1-based and global to the file.
fn write_obj<W: Write>(scene: &NetScene, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "# {}", scene.name)?;
    writeln!(writer, "g {}", obj_name(&scene.name))?;

    let mut next_index = 1usize;
    for line in &scene.lines {
        writeln!(writer, "o {}", obj_name(&line.name))?;
        for p in &line.positions {
            writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
        }

        let first = next_index;
        next_index += line.positions.len();
        if line.positions.len() < 2 {
            continue;
        }

        write!(writer, "l")?;
        for index in first..next_index {
            write!(writer, " {index}")?;
        }
        if line.style.loop_closed {
            write!(writer, " {first}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::NetCalculator;
    use crate::plot::LineStyle;
    use crate::scene::SceneLine;
    use glam::DVec3;

    fn sample_scene(loop_closed: bool) -> NetScene {
        let style = LineStyle {
            loop_closed,
            ..LineStyle::default()
        };
        NetScene {
            name: "Latitude-Longitude Net: 5:5".to_string(),
            lines: vec![
                SceneLine {
                    name: "Latitude № 0".to_string(),
                    style,
                    positions: vec![DVec3::X, DVec3::Y, DVec3::Z],
                },
                SceneLine {
                    name: "Longitude № 0".to_string(),
                    style,
                    positions: vec![DVec3::new(1.5, -2.0, 0.0), DVec3::new(0.0, 0.0, 4.0)],
                },
            ],
        }
    }

    fn obj_text(scene: &NetScene) -> String {
        let mut buf = Vec::new();
        export_scene(scene, OutputFormat::Obj, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_obj_polylines() {
        let text = obj_text(&sample_scene(false));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# Latitude-Longitude Net: 5:5");
        assert_eq!(lines[1], "g Latitude-Longitude_Net:_5:5");
        assert_eq!(lines[2], "o Latitude_№_0");
        assert_eq!(lines[3], "v 1 0 0");
        assert!(lines.contains(&"l 1 2 3"));
        assert!(lines.contains(&"o Longitude_№_0"));
        assert!(lines.contains(&"v 1.5 -2 0"));
        assert!(lines.contains(&"l 4 5"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 5);
    }

    #[test]
    fn test_obj_closed_loops_return_to_start() {
        let text = obj_text(&sample_scene(true));
        assert!(text.lines().any(|l| l == "l 1 2 3 1"));
        assert!(text.lines().any(|l| l == "l 4 5 4"));
    }

    #[test]
    fn test_json_roundtrip() {
        let scene = sample_scene(false);
        let mut buf = Vec::new();
        export_scene(&scene, OutputFormat::Json, &mut buf).unwrap();
        let parsed: NetScene = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, scene);
    }

    #[test]
    fn test_json_preserves_rotated_points_exactly() {
        let net = NetCalculator::default().calculate().unwrap();
        let style = LineStyle::default();
        let scene = NetScene {
            name: "rotated".to_string(),
            lines: net
                .lat_coords()
                .iter()
                .step_by(97)
                .enumerate()
                .map(|(i, positions)| SceneLine {
                    name: format!("Latitude № {i}"),
                    style,
                    positions: positions.clone(),
                })
                .collect(),
        };

        let mut buf = Vec::new();
        export_scene(&scene, OutputFormat::Json, &mut buf).unwrap();
        let parsed: NetScene = serde_json::from_slice(&buf).unwrap();

        for (a, b) in parsed.lines.iter().zip(&scene.lines) {
            for (p, q) in a.positions.iter().zip(&b.positions) {
                assert_eq!(p.to_array().map(f64::to_bits), q.to_array().map(f64::to_bits));
            }
        }
        assert_eq!(parsed, scene);
    }

    #[test]
    fn test_write_scene_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("net.obj");
        write_scene(&sample_scene(false), &path, OutputFormat::Obj).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Latitude-Longitude Net: 5:5"));
    }
}
