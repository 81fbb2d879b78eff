//! Axis remapping by sequential rotations about the world origin.
//!
//! Net points are computed in a z-up spherical convention. Scenes usually want
//! y-up, so every point is rotated about +X, then +Y, then +Z by the angles of a
//! [`RotationOffset`]. Rotations do not commute, and the order is part of the
//! contract.

use glam::{DQuat, DVec3};
use graticule_config::RotationConfig;

/// A world axis to rotate about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the positive axis.
    #[inline]
    #[must_use]
    pub fn unit(self) -> DVec3 {
        match self {
            Self::X => DVec3::X,
            Self::Y => DVec3::Y,
            Self::Z => DVec3::Z,
        }
    }
}

/// Rotation angles in degrees, applied about X, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationOffset {
    /// No rotation at all.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The `(axis, degrees)` steps in application order.
    #[must_use]
    pub fn steps(&self) -> [(Axis, f64); 3] {
        [(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)]
    }

    /// The three steps composed into one quaternion. `to_quat() * p` equals
    /// [`rotate_about_origin`] up to rounding.
    #[must_use]
    pub fn to_quat(&self) -> DQuat {
        DQuat::from_rotation_z(self.z.to_radians())
            * DQuat::from_rotation_y(self.y.to_radians())
            * DQuat::from_rotation_x(self.x.to_radians())
    }

    /// First step whose angle is NaN or infinite.
    #[must_use]
    pub fn non_finite_step(&self) -> Option<(Axis, f64)> {
        self.steps().into_iter().find(|(_, angle)| !angle.is_finite())
    }
}

impl Default for RotationOffset {
    /// `(0, -90, 90)`: maps spherical z-up onto a y-up scene.
    fn default() -> Self {
        Self::new(0.0, -90.0, 90.0)
    }
}

impl From<RotationConfig> for RotationOffset {
    fn from(config: RotationConfig) -> Self {
        Self::new(config.x, config.y, config.z)
    }
}

/// Rotate `point` about the world origin by `angle_deg` around `axis`.
///
/// Positive angles turn counter-clockwise when looking down the axis toward
/// the origin.
#[inline]
#[must_use]
pub fn rotate_about_axis(point: DVec3, axis: Axis, angle_deg: f64) -> DVec3 {
    DQuat::from_axis_angle(axis.unit(), angle_deg.to_radians()) * point
}

/// Apply single-axis rotations one after another, in slice order.
#[must_use]
pub fn rotate_sequence(point: DVec3, steps: &[(Axis, f64)]) -> DVec3 {
    steps
        .iter()
        .fold(point, |p, &(axis, angle)| rotate_about_axis(p, axis, angle))
}

/// Rotate `point` about the origin by `offset`: X first, then Y, then Z.
#[inline]
#[must_use]
pub fn rotate_about_origin(point: DVec3, offset: RotationOffset) -> DVec3 {
    rotate_sequence(point, &offset.steps())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_quarter_turns_about_each_axis() {
        assert_close(rotate_about_axis(DVec3::Y, Axis::X, 90.0), DVec3::Z);
        assert_close(rotate_about_axis(DVec3::Z, Axis::Y, 90.0), DVec3::X);
        assert_close(rotate_about_axis(DVec3::X, Axis::Z, 90.0), DVec3::Y);
        assert_close(rotate_about_axis(DVec3::X, Axis::Y, -90.0), DVec3::Z);
    }

    #[test]
    fn test_default_offset_maps_prime_meridian_equator() {
        let p = DVec3::new(6371.0, 0.0, 0.0);
        assert_close(
            rotate_about_origin(p, RotationOffset::default()),
            DVec3::new(0.0, 0.0, 6371.0),
        );
    }

    #[test]
    fn test_default_offset_maps_north_pole() {
        let p = DVec3::new(0.0, 0.0, 6371.0);
        assert_close(
            rotate_about_origin(p, RotationOffset::default()),
            DVec3::new(0.0, -6371.0, 0.0),
        );
    }

    #[test]
    fn test_matches_three_sequential_rotations() {
        let offset = RotationOffset::new(30.0, -90.0, 90.0);
        let points = [
            DVec3::new(6371.0, 0.0, 0.0),
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(-4.5, 0.25, 7.0),
        ];
        for p in points {
            let step_x = rotate_about_axis(p, Axis::X, 30.0);
            let step_y = rotate_about_axis(step_x, Axis::Y, -90.0);
            let step_z = rotate_about_axis(step_y, Axis::Z, 90.0);
            assert_close(rotate_about_origin(p, offset), step_z);
        }
    }

    #[test]
    fn test_order_matters() {
        let p = DVec3::new(6371.0, 0.0, 0.0);
        let offset = RotationOffset::default();
        let xyz = rotate_about_origin(p, offset);
        let zyx = rotate_sequence(
            p,
            &[(Axis::Z, offset.z), (Axis::Y, offset.y), (Axis::X, offset.x)],
        );
        assert_close(zyx, DVec3::new(0.0, 6371.0, 0.0));
        assert!((xyz - zyx).length() > 1.0);
    }

    #[test]
    fn test_identity_and_length_preserved() {
        let p = DVec3::new(3.0, -4.0, 12.0);
        assert_eq!(rotate_about_origin(p, RotationOffset::IDENTITY), p);

        let rotated = rotate_about_origin(p, RotationOffset::new(17.0, 123.0, -48.0));
        assert!((rotated.length() - 13.0).abs() < EPSILON);
    }

    #[test]
    fn test_composed_quat_matches_step_rotation() {
        let offsets = [
            RotationOffset::default(),
            RotationOffset::new(30.0, -90.0, 90.0),
            RotationOffset::new(17.0, 123.0, -48.0),
        ];
        let points = [
            DVec3::new(6371.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 63.83),
            DVec3::new(-4.5, 0.25, 7.0),
        ];
        for offset in offsets {
            let q = offset.to_quat();
            for p in points {
                assert_close(q * p, rotate_about_origin(p, offset));
            }
        }
        assert!(RotationOffset::IDENTITY.to_quat().abs_diff_eq(DQuat::IDENTITY, EPSILON));
    }

    #[test]
    fn test_non_finite_step() {
        assert_eq!(RotationOffset::default().non_finite_step(), None);
        let bad = RotationOffset::new(0.0, f64::INFINITY, f64::NAN);
        assert_eq!(bad.non_finite_step(), Some((Axis::Y, f64::INFINITY)));
    }

    #[test]
    fn test_from_config() {
        assert_eq!(
            RotationOffset::from(RotationConfig::default()),
            RotationOffset::default()
        );
    }
}
