//! RANSAC line extraction over angularly sorted scans.
//!
//! Each trial runs through the following stages:
//!
//! ```text
//! SEED_SELECT ─► GROW ─► FIT_SEED ─► ASSOCIATE ─► FIT_FINAL ─► ACCEPT
//!                           │             │            │
//!                           └─────────────┴────────────┴──► ROLLBACK
//! ```
//!
//! 1. A random active node becomes the reference.
//! 2. Its immediate left/right angular neighbors within `sample_deviation`
//!    are popped into a seed cluster, then the reference itself.
//! 3. A least-squares line is fitted to the seed.
//! 4. Every active node within `proximity_epsilon` of that line joins.
//! 5. With at least `line_consensus` members, the line is refitted on all of
//!    them and accepted; the members stay consumed.
//! 6. Otherwise every node popped during the trial goes back into the active
//!    range in angle order.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rekha::{Ransac, RansacConfig, PolarReading};
//!
//! let mut ransac = Ransac::new(RansacConfig::default());
//!
//! // Readings are converted into the pre-allocated scratch buffer
//! let stats = ransac.compute_scan(&readings)?;
//! for line in ransac.lines() {
//!     println!("y = {:.3}x + {:.3}", line.slope, line.intercept);
//! }
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::config::RansacConfig;
use crate::core::{Line, Node, ScanReading};

use super::observer::{NoopObserver, TrialObserver};
use super::partition::NodePartition;
use super::regression::{FitError, fit_line};

/// Why a single trial was rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrialFailure {
    /// The seed cluster was too small to fit.
    #[error("seed cluster has {members} member(s)")]
    SeedTooSmall {
        /// Nodes in the seed cluster.
        members: usize,
    },
    /// The seed cluster could not be fitted.
    #[error("seed fit failed: {0}")]
    SeedFit(FitError),
    /// Not enough nodes agreed with the seed line.
    #[error("{members} member(s), consensus needs {required}")]
    NoConsensus {
        /// Seed plus associated nodes.
        members: usize,
        /// Configured `line_consensus`.
        required: usize,
    },
    /// The refinement fit over all members failed.
    #[error("refit failed: {0}")]
    Refit(FitError),
}

/// Errors from [`Ransac::compute_scan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The scan holds more readings than the scratch buffer was sized for.
    #[error("scan has {len} readings, scratch capacity is {capacity}")]
    CapacityExceeded {
        /// Readings in the scan.
        len: usize,
        /// Configured `max_nodes`.
        capacity: usize,
    },
}

/// Summary of one `compute` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Trials executed.
    pub trials: usize,
    /// Trials that produced a line.
    pub accepted: usize,
    /// Trials that were rolled back.
    pub rolled_back: usize,
    /// Nodes consumed by accepted lines.
    pub consumed: usize,
    /// Nodes left in the active range.
    pub remaining: usize,
}

/// RANSAC line extractor.
///
/// Holds the configuration, random generator, accepted lines of the last run
/// and a scratch buffer sized to `max_nodes` for [`compute_scan`](Self::compute_scan).
pub struct Ransac<O: TrialObserver = NoopObserver> {
    config: RansacConfig,
    rng: StdRng,
    lines: Vec<Line>,
    scratch: Vec<Node>,
    scratch_remaining: usize,
    stats: ExtractionStats,
    observer: O,
}

impl Ransac<NoopObserver> {
    /// Create an extractor that reports nothing.
    pub fn new(config: RansacConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: TrialObserver> Ransac<O> {
    /// Create an extractor that reports to `observer`.
    pub fn with_observer(config: RansacConfig, observer: O) -> Self {
        Self {
            rng: seeded_rng(config.seed),
            lines: Vec::new(),
            scratch: Vec::with_capacity(config.max_nodes),
            scratch_remaining: 0,
            stats: ExtractionStats::default(),
            config,
            observer,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &RansacConfig {
        &self.config
    }

    /// Lines accepted by the last run, in acceptance order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Statistics of the last run.
    pub fn stats(&self) -> ExtractionStats {
        self.stats
    }

    /// Scratch nodes not consumed by the last [`compute_scan`](Self::compute_scan).
    pub fn unassigned(&self) -> &[Node] {
        &self.scratch[..self.scratch_remaining]
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Restart the random generator. `0` seeds from the OS.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    /// Extract lines from `nodes`, which must be sorted ascending by angle.
    ///
    /// Nodes are only reordered, never dropped or duplicated. On return the
    /// nodes still unassigned sit in `nodes[..stats.remaining]` in angle order
    /// and the consumed ones after them. Previous results are discarded.
    pub fn compute(&mut self, nodes: &mut [Node]) -> ExtractionStats {
        self.lines.clear();
        self.observer.run_started(nodes.len(), self.config.max_trials);

        let mut partition = NodePartition::new(nodes);
        let mut stats = ExtractionStats::default();

        while !partition.is_empty() && stats.trials < self.config.max_trials {
            match self.run_trial(stats.trials, &mut partition) {
                Ok(line) => {
                    self.lines.push(line);
                    stats.accepted += 1;
                }
                Err(_) => stats.rolled_back += 1,
            }
            stats.trials += 1;
        }

        stats.remaining = partition.size();
        stats.consumed = partition.capacity() - partition.size();

        self.observer.run_finished(&stats);
        self.stats = stats;
        stats
    }

    /// Convert raw readings into the scratch buffer and extract lines there.
    ///
    /// Readings are sorted by bearing after conversion, so they may arrive in
    /// any order. Fails without touching previous results when the scan is
    /// larger than `max_nodes`.
    pub fn compute_scan<R: ScanReading>(
        &mut self,
        readings: &[R],
    ) -> Result<ExtractionStats, ExtractionError> {
        if readings.len() > self.config.max_nodes {
            return Err(ExtractionError::CapacityExceeded {
                len: readings.len(),
                capacity: self.config.max_nodes,
            });
        }

        // Detach the buffer so `compute` can borrow self mutably
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        scratch.extend(readings.iter().map(Node::from_reading));
        scratch.sort_unstable_by(|a, b| a.angle.total_cmp(&b.angle));

        let stats = self.compute(&mut scratch);

        self.scratch = scratch;
        self.scratch_remaining = stats.remaining;
        Ok(stats)
    }

    /// Run one trial, rolling back on failure.
    fn run_trial(
        &mut self,
        trial: usize,
        partition: &mut NodePartition<'_>,
    ) -> Result<Line, TrialFailure> {
        let trial_start = partition.size();
        let reference = self.rng.random_range(0..trial_start);
        self.observer.trial_started(trial, reference, trial_start);

        match attempt(&self.config, partition, reference) {
            Ok(line) => {
                self.observer
                    .line_accepted(trial, &line, partition.removed_since(trial_start));
                Ok(line)
            }
            Err(failure) => {
                partition.restore(trial_start);
                self.observer.trial_rejected(trial, &failure);
                Err(failure)
            }
        }
    }
}

fn seeded_rng(seed: u64) -> StdRng {
    if seed == 0 {
        StdRng::from_os_rng()
    } else {
        StdRng::seed_from_u64(seed)
    }
}

/// Grow, fit, associate and refit around `reference`.
///
/// Leaves the popped nodes in place on failure; the caller restores them.
fn attempt(
    config: &RansacConfig,
    partition: &mut NodePartition<'_>,
    reference: usize,
) -> Result<Line, TrialFailure> {
    let trial_start = partition.size();

    let members = grow_seed(
        partition,
        reference,
        config.sample_size,
        config.sample_deviation,
    );
    if members < 2 {
        return Err(TrialFailure::SeedTooSmall { members });
    }

    let seed_line =
        fit_line(partition.removed_since(trial_start)).map_err(TrialFailure::SeedFit)?;

    associate(partition, &seed_line, config.proximity_epsilon);

    let members = trial_start - partition.size();
    if members < config.line_consensus {
        return Err(TrialFailure::NoConsensus {
            members,
            required: config.line_consensus,
        });
    }

    fit_line(partition.removed_since(trial_start)).map_err(TrialFailure::Refit)
}

/// Pop the reference and its angular neighbors. Returns the cluster size.
///
/// Looks alternately left and right of the reference, `sample_size` times.
/// Neighbor indices wrap around the active range. Popping a node left of the
/// reference shifts the reference down by one slot.
fn grow_seed(
    partition: &mut NodePartition<'_>,
    mut reference: usize,
    sample_size: usize,
    sample_deviation: f32,
) -> usize {
    let start = partition.size();
    let reference_angle = partition.node(reference).angle;

    for i in 0..sample_size {
        let size = partition.size();
        let pick = if i % 2 == 0 {
            (reference + size - 1) % size
        } else {
            (reference + 1) % size
        };

        if pick != reference
            && (partition.node(pick).angle - reference_angle).abs() <= sample_deviation
        {
            partition.pop(pick);
            if pick < reference {
                reference -= 1;
            }
        }
    }

    partition.pop(reference);
    start - partition.size()
}

/// Pop every active node within `epsilon` of `line`. Returns how many joined.
///
/// Walks from the top of the active range down so pops never move an
/// unvisited node.
fn associate(partition: &mut NodePartition<'_>, line: &Line, epsilon: f32) -> usize {
    let start = partition.size();
    let threshold = epsilon * epsilon;

    for i in (0..start).rev() {
        let node = partition.node(i);
        if line.squared_distance(node.x, node.y) <= threshold {
            partition.pop(i);
        }
    }

    start - partition.size()
}
