//! Scan node type shared by the partitioner, fitter and driver.

use serde::{Deserialize, Serialize};

use super::reading::ScanReading;

/// A single scan point in Cartesian form, tagged with its polar bearing.
///
/// `x` and `y` drive regression and distance checks. `angle` is only used to
/// pick angular neighbors while growing a seed cluster.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate in meters.
    pub x: f32,
    /// Y coordinate in meters.
    pub y: f32,
    /// Polar bearing in radians.
    pub angle: f32,
}

impl Node {
    /// Create a new node.
    #[inline]
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Build a node from a raw sensor reading.
    #[inline]
    pub fn from_reading<R: ScanReading + ?Sized>(reading: &R) -> Self {
        let (x, y) = reading.to_cartesian();
        Self {
            x,
            y,
            angle: reading.to_angle(),
        }
    }
}

/// Check that nodes are sorted ascending by angle.
pub fn is_sorted_by_angle(nodes: &[Node]) -> bool {
    nodes.windows(2).all(|w| w[0].angle <= w[1].angle)
}
