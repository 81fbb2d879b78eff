//! Input parameters of a net: sampling accuracy, plot step and sphere shape.

use std::fmt;

use graticule_config::{AccuracyConfig, NetConfig, PlotStepConfig};
use tracing::warn;

use crate::error::NetError;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Upper bound on `latitude samples * longitude samples` for one net.
///
/// Every point is stored twice (once per line family), so this caps a net at
/// roughly 800 MB of `DVec3`s.
pub const MAX_NET_POINTS: usize = 1 << 24;

/// One of the two sampled directions of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAxis {
    Latitude,
    Longitude,
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => f.write_str("latitude"),
            Self::Longitude => f.write_str("longitude"),
        }
    }
}

/// Angular spacing between consecutive samples, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accuracy {
    pub latitude: f64,
    pub longitude: f64,
}

impl Accuracy {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Accuracy {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl From<AccuracyConfig> for Accuracy {
    fn from(config: AccuracyConfig) -> Self {
        Self::new(config.latitude, config.longitude)
    }
}

/// Stride, in sample-index units, between emitted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotStep {
    pub latitude: usize,
    pub longitude: usize,
}

impl PlotStep {
    pub fn new(latitude: usize, longitude: usize) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for PlotStep {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

impl From<PlotStepConfig> for PlotStep {
    fn from(config: PlotStepConfig) -> Self {
        Self::new(config.latitude, config.longitude)
    }
}

/// Radius, lift and scale of the sphere the net is draped over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    /// Radius of the reference sphere.
    pub base_radius: f64,
    /// Added to `base_radius` so the net floats above the surface.
    pub vertical_offset: f64,
    /// Uniform scale applied after the spherical conversion.
    pub scale: f64,
}

impl SphereShape {
    /// Effective radius before scaling.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.base_radius + self.vertical_offset
    }

    /// First field that is NaN or infinite, by name.
    #[must_use]
    pub fn non_finite_field(&self) -> Option<(&'static str, f64)> {
        [
            ("base_radius", self.base_radius),
            ("vertical_offset", self.vertical_offset),
            ("scale", self.scale),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}

impl Default for SphereShape {
    /// Earth radius lifted by 12 km, scaled by 0.01.
    fn default() -> Self {
        Self {
            base_radius: EARTH_RADIUS_KM,
            vertical_offset: 12.0,
            scale: 0.01,
        }
    }
}

impl From<&NetConfig> for SphereShape {
    fn from(config: &NetConfig) -> Self {
        Self {
            base_radius: config.base_radius,
            vertical_offset: config.vertical_offset,
            scale: config.scale_coefficient,
        }
    }
}

/// Number of samples taken along each axis.
///
/// Both axes sweep two half-turns' worth of samples: `latitude` points make up
/// one latitude-index line, `longitude` points one longitude-index line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCounts {
    pub latitude: usize,
    pub longitude: usize,
}

impl SampleCounts {
    /// Total number of distinct grid points.
    pub fn points(&self) -> usize {
        self.latitude * self.longitude
    }
}

/// Sample counts for an accuracy: `trunc(180 / lat) * 2` and `trunc(360 / lon) * 2`.
///
/// An accuracy that does not divide its span evenly is truncated, so the last
/// line stops short of closing the circle. That is logged as a warning, not
/// rejected.
pub fn sample_counts(accuracy: Accuracy) -> Result<SampleCounts, NetError> {
    let latitude = axis_samples(GridAxis::Latitude, 180.0, accuracy.latitude)?;
    let longitude = axis_samples(GridAxis::Longitude, 360.0, accuracy.longitude)?;

    if latitude.saturating_mul(longitude) > MAX_NET_POINTS {
        return Err(NetError::TooManyPoints {
            latitude,
            longitude,
            max: MAX_NET_POINTS,
        });
    }

    Ok(SampleCounts {
        latitude,
        longitude,
    })
}

fn axis_samples(axis: GridAxis, span_deg: f64, step_deg: f64) -> Result<usize, NetError> {
    if !step_deg.is_finite() || step_deg <= 0.0 {
        return Err(NetError::InvalidAccuracy {
            axis,
            value: step_deg,
        });
    }

    let steps = span_deg / step_deg;
    if steps.fract() != 0.0 {
        warn!(
            %axis,
            accuracy = step_deg,
            "accuracy does not divide {span_deg} degrees evenly; sample count is truncated"
        );
    }

    let whole = steps.trunc();
    if whole < 1.0 {
        return Err(NetError::EmptyGrid {
            axis,
            value: step_deg,
        });
    }

    // `as` saturates, so absurdly fine accuracies land in TooManyPoints.
    Ok((whole as usize).saturating_mul(2))
}
