//! Grid calculator: samples the sphere and builds both line families.

use glam::DVec3;
use graticule_config::NetConfig;
use tracing::debug;

use crate::error::NetError;
use crate::params::{Accuracy, SampleCounts, SphereShape, sample_counts};
use crate::rotation::{RotationOffset, rotate_about_origin};

/// Convert a latitude/longitude pair in degrees to a scaled Cartesian point.
///
/// ```text
/// x = R cos(lat) cos(lon) s
/// y = R cos(lat) sin(lon) s
/// z = R sin(lat) s
/// ```
///
/// with `R = base_radius + vertical_offset` and `s = scale`. Z is up.
#[inline]
#[must_use]
pub fn spherical_to_cartesian(lat_deg: f64, lon_deg: f64, shape: &SphereShape) -> DVec3 {
    let r = shape.radius();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();

    DVec3::new(
        r * cos_lat * cos_lon * shape.scale,
        r * cos_lat * sin_lon * shape.scale,
        r * sin_lat * shape.scale,
    )
}

/// Everything needed to compute a [`LatLongNet`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NetCalculator {
    pub accuracy: Accuracy,
    pub shape: SphereShape,
    pub rotation: RotationOffset,
}

impl NetCalculator {
    pub fn new(accuracy: Accuracy, shape: SphereShape, rotation: RotationOffset) -> Self {
        Self {
            accuracy,
            shape,
            rotation,
        }
    }

    /// Compute the full net from scratch.
    ///
    /// Fails if the shape or rotation holds a NaN or infinite value, since every
    /// point would come out NaN.
    ///
    /// Latitude sample `i` sits at `i * accuracy.latitude` degrees, longitude
    /// sample `j` at `j * accuracy.longitude` degrees. Every point is rotated
    /// by [`rotate_about_origin`] before it is stored.
    pub fn calculate(&self) -> Result<LatLongNet, NetError> {
        if let Some((field, value)) = self.shape.non_finite_field() {
            return Err(NetError::NonFiniteShape { field, value });
        }
        if let Some((axis, value)) = self.rotation.non_finite_step() {
            return Err(NetError::NonFiniteRotation { axis, value });
        }
        let counts = sample_counts(self.accuracy)?;
        debug!(
            latitude_samples = counts.latitude,
            longitude_samples = counts.longitude,
            "calculating net"
        );

        let lat_deg: Vec<f64> = (0..counts.latitude)
            .map(|i| i as f64 * self.accuracy.latitude)
            .collect();
        let lon_deg: Vec<f64> = (0..counts.longitude)
            .map(|j| j as f64 * self.accuracy.longitude)
            .collect();

        let mut lat_coords: Vec<Vec<DVec3>> = (0..counts.longitude)
            .map(|_| Vec::with_capacity(counts.latitude))
            .collect();
        let mut long_coords: Vec<Vec<DVec3>> = (0..counts.latitude)
            .map(|_| Vec::with_capacity(counts.longitude))
            .collect();

        for (i, &lat) in lat_deg.iter().enumerate() {
            for (j, &lon) in lon_deg.iter().enumerate() {
                let point = rotate_about_origin(
                    spherical_to_cartesian(lat, lon, &self.shape),
                    self.rotation,
                );
                lat_coords[j].push(point);
                long_coords[i].push(point);
            }
        }

        Ok(LatLongNet {
            counts,
            lat_coords,
            long_coords,
        })
    }
}

impl From<&NetConfig> for NetCalculator {
    fn from(config: &NetConfig) -> Self {
        Self::new(
            config.accuracy.into(),
            SphereShape::from(config),
            config.rotation_offset.into(),
        )
    }
}

/// A calculated net: the same grid points indexed two ways.
///
/// `lat_coords[j][i]` and `long_coords[i][j]` are the point at latitude index
/// `i` and longitude index `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct LatLongNet {
    counts: SampleCounts,
    lat_coords: Vec<Vec<DVec3>>,
    long_coords: Vec<Vec<DVec3>>,
}

impl LatLongNet {
    pub fn counts(&self) -> SampleCounts {
        self.counts
    }

    /// One line per longitude index, each running over every latitude sample.
    pub fn lat_coords(&self) -> &[Vec<DVec3>] {
        &self.lat_coords
    }

    /// One line per latitude index, each running over every longitude sample.
    pub fn long_coords(&self) -> &[Vec<DVec3>] {
        &self.long_coords
    }

    /// The point at latitude index `lat` and longitude index `lon`.
    pub fn point(&self, lat: usize, lon: usize) -> Option<DVec3> {
        self.lat_coords.get(lon)?.get(lat).copied()
    }
}
