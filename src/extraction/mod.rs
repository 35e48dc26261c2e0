//! Line extraction from angularly sorted scan nodes.
//!
//! # Components
//!
//! - **Partition**: in-place active/removed split of the node slice
//! - **Regression**: closed-form least-squares line fit
//! - **RANSAC**: trial driver (seed, grow, associate, accept or roll back)
//! - **Observer**: hooks for logging and diagnostics

pub mod observer;
pub mod partition;
pub mod ransac;
pub mod regression;

pub use observer::{LogObserver, NoopObserver, TrialObserver};
pub use partition::NodePartition;
pub use ransac::{ExtractionError, ExtractionStats, Ransac, TrialFailure};
pub use regression::{FitError, fit_line};
