//! Latitude/longitude net geometry: sample a sphere on a regular lat/lon grid,
//! remap the points into a scene's axis convention, and hand the resulting
//! polylines to a line-drawing sink.

mod calculator;
mod error;
mod export;
mod params;
mod plot;
mod rotation;
mod scene;

pub use calculator::{LatLongNet, NetCalculator, spherical_to_cartesian};
pub use error::{ExportError, NetError, PlotError, SinkError};
pub use export::{export_scene, write_scene};
pub use params::{
    Accuracy, EARTH_RADIUS_KM, GridAxis, MAX_NET_POINTS, PlotStep, SampleCounts, SphereShape,
    sample_counts,
};
pub use plot::{
    LinePrefab, LineSink, LineStyle, NetPlotter, PlotSummary, latitude_line_name,
    longitude_line_name, net_group_name, plot_net,
};
pub use rotation::{Axis, RotationOffset, rotate_about_axis, rotate_about_origin, rotate_sequence};
pub use scene::{NetScene, SceneBuilder, SceneLine};

pub use graticule_config::OutputFormat;
