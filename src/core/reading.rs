//! Raw range readings and their conversion into scan nodes.
//!
//! The extractor never looks at raw sensor data directly. Anything that can
//! report a Cartesian position and a bearing can be fed to
//! [`Ransac::compute_scan`](crate::Ransac::compute_scan).

use serde::{Deserialize, Serialize};

/// A raw reading from a rotating range sensor.
pub trait ScanReading {
    /// Cartesian position of the hit `(x, y)` in meters.
    fn to_cartesian(&self) -> (f32, f32);

    /// Polar bearing of the reading in radians.
    fn to_angle(&self) -> f32;
}

/// Range/bearing reading as produced by a 2D lidar.
///
/// Coordinate frame follows ROS REP-103:
/// - Angle 0 is forward (X-axis)
/// - Positive angles are counter-clockwise (toward Y-axis)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarReading {
    /// Bearing in radians.
    pub angle: f32,
    /// Range in meters.
    pub range: f32,
}

impl PolarReading {
    /// Create a new polar reading.
    #[inline]
    pub fn new(angle: f32, range: f32) -> Self {
        Self { angle, range }
    }
}

impl ScanReading for PolarReading {
    #[inline]
    fn to_cartesian(&self) -> (f32, f32) {
        let (sin, cos) = self.angle.sin_cos();
        (self.range * cos, self.range * sin)
    }

    #[inline]
    fn to_angle(&self) -> f32 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_polar_forward() {
        let (x, y) = PolarReading::new(0.0, 3.0).to_cartesian();
        assert_relative_eq!(x, 3.0);
        assert_relative_eq!(y, 0.0);
    }

    #[test]
    fn test_polar_behind() {
        let reading = PolarReading::new(PI, 1.5);
        let (x, y) = reading.to_cartesian();
        assert_relative_eq!(x, -1.5, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(reading.to_angle(), PI);
    }
}
