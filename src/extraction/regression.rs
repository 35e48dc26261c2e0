//! Ordinary least-squares line fitting.
//!
//! Solves the normal equations in closed form:
//!
//! ```text
//! slope     = (n·Σxy − Σx·Σy)  / (n·Σx² − (Σx)²)
//! intercept = (Σy·Σx² − Σx·Σxy) / (n·Σx² − (Σx)²)
//! ```
//!
//! Sums are accumulated in `f64` so that the singularity check on the
//! denominator is exact for single points and vertical sets.

use thiserror::Error;

use crate::core::{Line, Node};

/// Why a regression line could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    /// No nodes were supplied.
    #[error("no nodes to fit")]
    Empty,
    /// The normal equations are singular (fewer than two distinct x values).
    #[error("singular normal equations")]
    Singular,
}

/// Fit `y = slope * x + intercept` to the nodes.
///
/// Fails on an empty slice, a single node, or nodes that all share one x
/// coordinate. The returned line always has finite fields.
pub fn fit_line(nodes: &[Node]) -> Result<Line, FitError> {
    if nodes.is_empty() {
        return Err(FitError::Empty);
    }

    let n = nodes.len() as f64;
    let mut x_sum = 0.0_f64;
    let mut y_sum = 0.0_f64;
    let mut x2_sum = 0.0_f64;
    let mut xy_sum = 0.0_f64;

    for node in nodes {
        let x = f64::from(node.x);
        let y = f64::from(node.y);
        x_sum += x;
        y_sum += y;
        x2_sum += x * x;
        xy_sum += x * y;
    }

    let slope_denom = n * x2_sum - x_sum * x_sum;
    if slope_denom == 0.0 {
        return Err(FitError::Singular);
    }
    let slope = (n * xy_sum - x_sum * y_sum) / slope_denom;

    let intercept_denom = n * x2_sum - x_sum * x_sum;
    if intercept_denom == 0.0 {
        return Err(FitError::Singular);
    }
    let intercept = (y_sum * x2_sum - x_sum * xy_sum) / intercept_denom;

    let line = Line::new(slope as f32, intercept as f32);
    // Near-vertical sets can overflow f32
    if !line.slope.is_finite() || !line.intercept.is_finite() {
        return Err(FitError::Singular);
    }

    Ok(line)
}
