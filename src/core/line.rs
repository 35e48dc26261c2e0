//! Slope-intercept line model.

use serde::{Deserialize, Serialize};

/// An infinite line `y = slope * x + intercept`.
///
/// Vertical lines cannot be represented; the fitter rejects them instead.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    /// Slope (dy/dx).
    pub slope: f32,
    /// Y-axis intercept.
    pub intercept: f32,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(slope: f32, intercept: f32) -> Self {
        Self { slope, intercept }
    }

    /// Y coordinate of the line at `x`.
    #[inline]
    pub fn y_at(&self, x: f32) -> f32 {
        self.slope * x + self.intercept
    }

    /// X coordinate of the line at `y`.
    ///
    /// A horizontal line has no single answer, so this returns `0.0` when the
    /// slope is exactly zero. Callers working with horizontal lines should not
    /// rely on this value.
    #[inline]
    pub fn x_at(&self, y: f32) -> f32 {
        if self.slope == 0.0 {
            return 0.0;
        }
        (y - self.intercept) / self.slope
    }

    /// Squared perpendicular distance from `(x, y)` to the line.
    #[inline]
    pub fn squared_distance(&self, x: f32, y: f32) -> f32 {
        let numerator = (-self.slope * x + y - self.intercept).abs();
        (numerator * numerator) / (self.slope * self.slope + 1.0)
    }

    /// Perpendicular distance from `(x, y)` to the line.
    #[inline]
    pub fn distance(&self, x: f32, y: f32) -> f32 {
        self.squared_distance(x, y).sqrt()
    }

    /// Direction of the line in radians, in `(-π/2, π/2)`.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.slope.atan()
    }
}
