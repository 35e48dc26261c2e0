//! # Rekha: RANSAC Line Extraction for 2D Range Scans
//!
//! Extracts straight walls from the points of a rotating range scanner using
//! a Random Sample Consensus procedure tailored to angularly sorted data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rekha::{PolarReading, Ransac, RansacConfig};
//!
//! let config = RansacConfig::default().with_seed(42);
//! let mut ransac = Ransac::new(config);
//!
//! let scan: Vec<PolarReading> = (0..90)
//!     .map(|i| {
//!         let angle = (45.0 + i as f32).to_radians();
//!         PolarReading::new(angle, 2.0 / angle.sin())
//!     })
//!     .collect();
//!
//! let stats = ransac.compute_scan(&scan).expect("scan fits the scratch buffer");
//! println!("{} lines in {} trials", stats.accepted, stats.trials);
//! for line in ransac.lines() {
//!     println!("y = {:.3}x + {:.3}", line.slope, line.intercept);
//! }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//!   raw readings ──► Node::from_reading ──► scratch buffer (sorted by angle)
//!                                                  │
//!                       ┌──────────────────────────┘
//!                       ▼
//!              ┌─────────────────┐   pop / restore   ┌───────────────┐
//!              │  RANSAC driver  │◄─────────────────►│ NodePartition │
//!              └────────┬────────┘                   └───────────────┘
//!                       │ fit_line / Line::squared_distance
//!                       ▼
//!                 accepted lines
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Node, Line and raw reading types
//! - [`extraction`]: partitioner, regression, RANSAC driver, observers
//! - [`config`]: configuration with YAML loading

pub mod config;
pub mod core;
pub mod extraction;

pub use config::{ConfigError, RansacConfig};
pub use crate::core::{Line, Node, PolarReading, ScanReading};
pub use extraction::{
    ExtractionError, ExtractionStats, FitError, LogObserver, NoopObserver, Ransac, TrialFailure,
    TrialObserver, fit_line,
};
