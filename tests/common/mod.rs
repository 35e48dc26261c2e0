//! Scene builders shared by the integration tests.

#![allow(dead_code)]

use rand::prelude::*;
use rekha::{Node, PolarReading};

/// Perpendicular-ish noise offsets, all below 0.01.
pub const NOISE: [f32; 6] = [0.004, -0.003, 0.005, -0.002, 0.003, -0.005];

/// Nodes on `y = slope * x + intercept` at the given x values, one every 5°
/// of bearing starting at `start_deg`.
pub fn wall(slope: f32, intercept: f32, xs: &[f32], start_deg: f32, noise: bool) -> Vec<Node> {
    xs.iter()
        .enumerate()
        .map(|(i, &x)| {
            let dy = if noise { NOISE[i % NOISE.len()] } else { 0.0 };
            Node::new(
                x,
                slope * x + intercept + dy,
                (start_deg + i as f32 * 5.0).to_radians(),
            )
        })
        .collect()
}

/// Two walls of six noisy nodes each: `y = x` seen at 0°–25°, and
/// `y = -x + 10` seen at 60°–85°.
pub fn two_walls() -> Vec<Node> {
    let mut nodes = wall(1.0, 0.0, &[-1.0, 0.0, 1.0, 2.0, 3.0, 4.0], 0.0, true);
    nodes.extend(wall(
        -1.0,
        10.0,
        &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0],
        60.0,
        true,
    ));
    nodes
}

/// Full 360° scan of a rectangular room from inside, with range noise.
///
/// The room is rotated by `rotation` so no wall is vertical.
pub fn room_scan(
    half_width: f32,
    half_height: f32,
    rotation: f32,
    num_points: usize,
    noise: f32,
    seed: u64,
) -> Vec<PolarReading> {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = std::f32::consts::TAU / num_points as f32;

    (0..num_points)
        .map(|i| {
            let angle = -std::f32::consts::PI + i as f32 * step;
            // Ray in the room frame
            let local = angle - rotation;
            let (sin, cos) = local.sin_cos();
            let tx = if cos.abs() > 1e-6 {
                half_width / cos.abs()
            } else {
                f32::MAX
            };
            let ty = if sin.abs() > 1e-6 {
                half_height / sin.abs()
            } else {
                f32::MAX
            };
            let range = tx.min(ty) + rng.random_range(-noise..=noise);
            PolarReading::new(angle, range)
        })
        .collect()
}

/// Order-independent fingerprint of a node collection.
pub fn multiset(nodes: &[Node]) -> Vec<(u32, u32, u32)> {
    let mut keys: Vec<(u32, u32, u32)> = nodes
        .iter()
        .map(|n| (n.x.to_bits(), n.y.to_bits(), n.angle.to_bits()))
        .collect();
    keys.sort_unstable();
    keys
}
