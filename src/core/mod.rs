//! Core types for rekha.
//!
//! - [`Node`]: scan point with Cartesian position and polar bearing
//! - [`Line`]: slope-intercept line with distance queries
//! - [`ScanReading`] and [`PolarReading`]: raw sensor readings

mod line;
mod node;
mod reading;

pub use line::Line;
pub use node::{Node, is_sorted_by_angle};
pub use reading::{PolarReading, ScanReading};
