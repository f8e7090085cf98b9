//! Cycle-bounded runs: stop at a budget, report partial completion, and
//! estimate the cycles a workload still needs.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SimConfig;
use crate::core::error::SimError;
use crate::core::scheduler::{RunSummary, Scheduler};
use crate::workload::TaskSpec;

/// Statistics of a run stopped at a cycle budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedRunReport {
    /// Global cycles elapsed when the run stopped (absolute, not per call).
    pub cycles_used: u64,
    /// The cycle budget the run was given.
    pub max_cycles: u64,
    /// Tasks completed so far.
    pub tasks_completed: usize,
    /// Tasks the scheduler was constructed with.
    pub total_tasks: usize,
    /// Completed share as a percentage; an empty workload reports 100.
    pub completion_rate: f64,
    /// Energy consumed so far across all units.
    pub energy_used: f64,
    /// True once every task has completed.
    pub fully_completed: bool,
}

/// A [`Scheduler`] driven under an absolute cycle budget.
///
/// The budget caps the global cycle counter, so bounded runs are
/// resumable: a later call with a larger budget, or a plain
/// [`run_to_completion`](Self::run_to_completion), continues from where
/// the previous call stopped without re-routing or duplicating work. A
/// call whose budget is already reached is a no-op that reports the same
/// statistics again.
#[derive(Debug, Clone)]
pub struct BoundedScheduler {
    inner: Scheduler,
}

impl BoundedScheduler {
    /// Build a bounded scheduler over the same task list and configuration
    /// a plain [`Scheduler`] takes.
    ///
    /// # Errors
    ///
    /// Same construction errors as [`Scheduler::new`].
    pub fn new(tasks: Vec<TaskSpec>, config: SimConfig) -> Result<Self, SimError> {
        Ok(Self {
            inner: Scheduler::new(tasks, config)?,
        })
    }

    /// Run until every task completes or the global cycle counter reaches
    /// `max_cycles`, whichever comes first.
    ///
    /// # Errors
    ///
    /// Propagates any [`SimError`] from [`Scheduler::step`].
    pub fn run_for_max_cycles(&mut self, max_cycles: u64) -> Result<BoundedRunReport, SimError> {
        debug!(max_cycles, cycle = self.inner.cycles(), "bounded run started");
        while !self.inner.is_complete() && self.inner.cycles() < max_cycles {
            self.inner.step()?;
        }
        let report = self.report(max_cycles);
        if report.fully_completed {
            info!(
                cycles = report.cycles_used,
                energy = report.energy_used,
                "bounded run completed all tasks"
            );
        } else {
            warn!(
                cycles = report.cycles_used,
                tasks_left = report.total_tasks - report.tasks_completed,
                remaining_work = self.inner.remaining_work(),
                "cycle budget exhausted with work remaining"
            );
        }
        Ok(report)
    }

    /// Finish the remaining work with no budget, continuing from the
    /// current cycle.
    ///
    /// # Errors
    ///
    /// Propagates any [`SimError`] from [`Scheduler::step`].
    pub fn run_to_completion(&mut self) -> Result<RunSummary, SimError> {
        self.inner.run_to_completion()
    }

    /// Estimate how many more cycles the remaining work needs, using the
    /// pool's weighted average per-cycle throughput at the configured
    /// class speeds. At least 1 whenever work remains, 0 otherwise.
    /// Advisory only: queue contention can make the true count higher.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn estimate_remaining_cycles(&self) -> u64 {
        let remaining = self.inner.remaining_work();
        if remaining <= 0.0 {
            return 0;
        }
        // Construction rejects pools with zero units while work is pending,
        // so the divisor is non-zero here.
        let config = self.inner.config();
        let fast = config.fast_units as f64;
        let eff = config.eff_units as f64;
        let avg_throughput =
            (fast * config.fast.speed + eff * config.eff.speed) / (fast + eff);
        let estimate = (remaining / avg_throughput).ceil() as u64;
        estimate.max(1)
    }

    /// The wrapped scheduler, for live queue and unit inspection.
    #[must_use]
    pub const fn scheduler(&self) -> &Scheduler {
        &self.inner
    }

    #[allow(clippy::cast_precision_loss)]
    fn report(&self, max_cycles: u64) -> BoundedRunReport {
        let tasks_completed = self.inner.completed_units().len();
        let total_tasks = self.inner.total_tasks();
        let completion_rate = if total_tasks == 0 {
            100.0
        } else {
            tasks_completed as f64 / total_tasks as f64 * 100.0
        };
        BoundedRunReport {
            cycles_used: self.inner.cycles(),
            max_cycles,
            tasks_completed,
            total_tasks,
            completion_rate,
            energy_used: self.inner.total_energy(),
            fully_completed: tasks_completed == total_tasks,
        }
    }
}
