//! Error types for net calculation, plotting and export.

use crate::params::GridAxis;
use crate::rotation::Axis;

/// Boxed error returned by [`LineSink`](crate::LineSink) implementations.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while calculating a net.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// Accuracy is zero, negative, NaN or infinite.
    #[error("{axis} accuracy must be a positive, finite number of degrees, got {value}")]
    InvalidAccuracy { axis: GridAxis, value: f64 },

    /// Accuracy is so coarse that the truncated sample count is zero.
    #[error("{axis} accuracy of {value} degrees yields no samples")]
    EmptyGrid { axis: GridAxis, value: f64 },

    /// Radius, offset or scale is NaN or infinite.
    #[error("sphere {field} must be finite, got {value}")]
    NonFiniteShape { field: &'static str, value: f64 },

    /// A rotation angle is NaN or infinite.
    #[error("rotation about {axis:?} must be a finite angle, got {value}")]
    NonFiniteRotation { axis: Axis, value: f64 },

    /// The grid would hold more points than [`MAX_NET_POINTS`](crate::MAX_NET_POINTS).
    #[error("{latitude}x{longitude} samples exceed the limit of {max} points")]
    TooManyPoints {
        latitude: usize,
        longitude: usize,
        max: usize,
    },
}

/// Errors raised by the "Plot Net" action.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// No line template was chosen.
    #[error("no line prefab chosen")]
    MissingLinePrefab,

    /// The template exists but cannot render lines.
    #[error("line prefab {prefab:?} has no line renderer")]
    NotLineRenderable { prefab: String },

    /// Plot step is zero or larger than the number of lines on that axis.
    #[error("{axis} plot step {step} is outside 1..={available}")]
    InvalidPlotStep {
        axis: GridAxis,
        step: usize,
        available: usize,
    },

    /// The net could not be calculated.
    #[error("failed to calculate net: {0}")]
    Net(#[from] NetError),

    /// The line sink rejected a group or a line.
    #[error("line sink failed: {0}")]
    Sink(#[source] SinkError),
}

/// Errors raised while writing a plotted scene.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Failed to create or write the output file.
    #[error("failed to write scene: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode the scene as JSON.
    #[error("failed to encode scene as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
