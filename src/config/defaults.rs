//! Default value functions for serde deserialization.

pub fn max_nodes() -> usize {
    400
}

pub fn max_trials() -> usize {
    100
}

pub fn sample_size() -> usize {
    4
}

pub fn sample_deviation() -> f32 {
    3.0_f32.to_radians()
}

pub fn proximity_epsilon() -> f32 {
    0.02
}

pub fn line_consensus() -> usize {
    5
}
