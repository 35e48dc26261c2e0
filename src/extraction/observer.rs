//! Hooks for watching the RANSAC driver work.
//!
//! The driver never logs by itself. Pass a [`LogObserver`] to get `log`
//! output, or implement [`TrialObserver`] to collect diagnostics.

use log::{Level, debug, log_enabled, trace};

use crate::core::{Line, Node};

use super::ransac::{ExtractionStats, TrialFailure};

/// Receives driver events. Every hook defaults to a no-op.
pub trait TrialObserver {
    /// A `compute` call is starting.
    fn run_started(&mut self, _nodes: usize, _max_trials: usize) {}

    /// A trial picked `reference` out of `active` nodes.
    fn trial_started(&mut self, _trial: usize, _reference: usize, _active: usize) {}

    /// A trial produced a line; `members` are the nodes it consumed.
    fn line_accepted(&mut self, _trial: usize, _line: &Line, _members: &[Node]) {}

    /// A trial failed and was rolled back.
    fn trial_rejected(&mut self, _trial: usize, _failure: &TrialFailure) {}

    /// A `compute` call finished.
    fn run_finished(&mut self, _stats: &ExtractionStats) {}
}

impl<T: TrialObserver + ?Sized> TrialObserver for &mut T {
    fn run_started(&mut self, nodes: usize, max_trials: usize) {
        (**self).run_started(nodes, max_trials);
    }

    fn trial_started(&mut self, trial: usize, reference: usize, active: usize) {
        (**self).trial_started(trial, reference, active);
    }

    fn line_accepted(&mut self, trial: usize, line: &Line, members: &[Node]) {
        (**self).line_accepted(trial, line, members);
    }

    fn trial_rejected(&mut self, trial: usize, failure: &TrialFailure) {
        (**self).trial_rejected(trial, failure);
    }

    fn run_finished(&mut self, stats: &ExtractionStats) {
        (**self).run_finished(stats);
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}

/// Observer that forwards events to the `log` facade.
///
/// Trial outcomes go to `debug`, per-trial chatter and member dumps to `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl TrialObserver for LogObserver {
    fn run_started(&mut self, nodes: usize, max_trials: usize) {
        debug!("RANSAC: {} nodes, up to {} trials", nodes, max_trials);
    }

    fn trial_started(&mut self, trial: usize, reference: usize, active: usize) {
        trace!(
            "Trial {}: reference index {} of {} active nodes",
            trial, reference, active
        );
    }

    fn line_accepted(&mut self, trial: usize, line: &Line, members: &[Node]) {
        debug!(
            "Trial {}: accepted line slope={:.4} intercept={:.4} ({} members)",
            trial,
            line.slope,
            line.intercept,
            members.len()
        );
        if log_enabled!(Level::Trace) {
            for node in members {
                trace!(
                    "  member [x: {:7.2} y: {:7.2} theta: {:7.2}]",
                    node.x, node.y, node.angle
                );
            }
        }
    }

    fn trial_rejected(&mut self, trial: usize, failure: &TrialFailure) {
        trace!("Trial {}: rolled back ({})", trial, failure);
    }

    fn run_finished(&mut self, stats: &ExtractionStats) {
        debug!(
            "RANSAC finished: {} lines in {} trials, {} nodes consumed, {} remaining",
            stats.accepted, stats.trials, stats.consumed, stats.remaining
        );
    }
}
