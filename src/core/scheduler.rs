//! The cycle-driven scheduling engine.
//!
//! Each cycle runs an assignment phase (preferred class first, then
//! cross-class fallback) followed by an advancement phase in which every
//! busy unit performs up to one cycle of work. The cycle counter increments
//! after advancement, so a run that finishes during its first cycle reports
//! a count of 1.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::config::SimConfig;
use crate::core::error::SimError;
use crate::core::processing_unit::{CoreClass, ProcessingUnit};
use crate::core::work_unit::WorkUnit;
use crate::workload::TaskSpec;

/// Final statistics of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Total energy consumed across all units.
    pub total_energy: f64,
    /// Number of tasks moved to the completed list.
    pub tasks_completed: usize,
}

/// The simulation driver: a pool of processing units partitioned into the
/// two classes, a pending queue per class, and a completed list.
///
/// Tasks are routed once at construction (strictly above the difficulty
/// threshold to the fast queue, at or below to the efficient queue) and
/// from then on every work unit is in exactly one of {a pending queue, held
/// by a unit, the completed list}. Unit iteration order is fixed: fast
/// units first, then efficient, which also breaks completion-order ties
/// within a cycle.
#[derive(Debug, Clone)]
pub struct Scheduler {
    fast_units: Vec<ProcessingUnit>,
    eff_units: Vec<ProcessingUnit>,
    fast_pending: VecDeque<WorkUnit>,
    eff_pending: VecDeque<WorkUnit>,
    completed: Vec<WorkUnit>,
    threshold: f64,
    cycle: u64,
    total_tasks: usize,
    config: SimConfig,
}

impl Scheduler {
    /// Build a scheduler from a task list and a configuration, validating
    /// everything up front so a constructed scheduler always terminates.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the configuration fails its own
    /// validation, [`SimError::NoUnits`] if both unit counts are zero while
    /// tasks are pending, and [`SimError::InvalidDifficulty`] for any task
    /// whose difficulty is non-finite or below 1. Non-positive class rates
    /// surface as
    /// [`SimError::InvalidSpeed`] / [`SimError::InvalidEnergyRate`] from
    /// unit construction.
    pub fn new(tasks: Vec<TaskSpec>, config: SimConfig) -> Result<Self, SimError> {
        config.validate().map_err(SimError::Config)?;
        if config.fast_units + config.eff_units == 0 && !tasks.is_empty() {
            return Err(SimError::NoUnits {
                pending: tasks.len(),
            });
        }
        for task in &tasks {
            if !task.difficulty.is_finite() || task.difficulty < 1.0 {
                return Err(SimError::InvalidDifficulty {
                    name: task.name.clone(),
                    difficulty: task.difficulty,
                });
            }
        }

        let fast_units = (0..config.fast_units)
            .map(|i| {
                ProcessingUnit::new(
                    format!("F{}", i + 1),
                    CoreClass::Fast,
                    config.fast.speed,
                    config.fast.energy_rate,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let eff_units = (0..config.eff_units)
            .map(|i| {
                ProcessingUnit::new(
                    format!("E{}", i + 1),
                    CoreClass::Efficient,
                    config.eff.speed,
                    config.eff.energy_rate,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut scheduler = Self {
            fast_units,
            eff_units,
            fast_pending: VecDeque::new(),
            eff_pending: VecDeque::new(),
            completed: Vec::with_capacity(tasks.len()),
            threshold: config.threshold,
            cycle: 0,
            total_tasks: tasks.len(),
            config,
        };
        scheduler.route_pending(tasks);
        debug!(
            fast = scheduler.fast_units.len(),
            eff = scheduler.eff_units.len(),
            fast_queued = scheduler.fast_pending.len(),
            eff_queued = scheduler.eff_pending.len(),
            threshold = scheduler.threshold,
            "scheduler constructed"
        );
        Ok(scheduler)
    }

    /// Route every task into a class queue, exactly once. Strictly above
    /// the threshold goes fast; equal-to-threshold goes efficient.
    fn route_pending(&mut self, tasks: Vec<TaskSpec>) {
        for task in tasks {
            let unit = WorkUnit::new(task.name, task.difficulty);
            let class = if unit.difficulty() > self.threshold {
                CoreClass::Fast
            } else {
                CoreClass::Efficient
            };
            debug!(
                task = unit.name(),
                difficulty = unit.difficulty(),
                queue = %class,
                "task routed"
            );
            match class {
                CoreClass::Fast => self.fast_pending.push_back(unit),
                CoreClass::Efficient => self.eff_pending.push_back(unit),
            }
        }
    }

    /// Hand queued work to idle units, head-first, until the queue empties
    /// or no idle unit remains.
    fn drain_into(
        queue: &mut VecDeque<WorkUnit>,
        units: &mut [ProcessingUnit],
    ) -> Result<(), SimError> {
        for unit in units.iter_mut().filter(|unit| unit.is_idle()) {
            let Some(work) = queue.pop_front() else { break };
            unit.assign(work)?;
        }
        Ok(())
    }

    /// The two-pass assignment phase: each class drains its own queue
    /// first, then any still-idle unit steals from the other class's queue.
    /// A unit left idle by the preferred pass participates in the same
    /// cycle's fallback pass.
    fn assign_to_units(&mut self) -> Result<(), SimError> {
        Self::drain_into(&mut self.fast_pending, &mut self.fast_units)?;
        Self::drain_into(&mut self.eff_pending, &mut self.eff_units)?;
        Self::drain_into(&mut self.eff_pending, &mut self.fast_units)?;
        Self::drain_into(&mut self.fast_pending, &mut self.eff_units)?;
        Ok(())
    }

    /// Run one full cycle: assignment, then one step of work on every busy
    /// unit, collecting completions in unit iteration order.
    ///
    /// # Errors
    ///
    /// Propagates [`SimError::UnitBusy`] if a work unit is handed to a busy
    /// unit, which the idle checks make unreachable in practice.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.assign_to_units()?;
        for unit in self
            .fast_units
            .iter_mut()
            .chain(self.eff_units.iter_mut())
        {
            if let Some(done) = unit.advance_one_cycle() {
                debug!(task = done.name(), cycle = self.cycle + 1, "task completed");
                self.completed.push(done);
            }
        }
        self.cycle += 1;
        trace!(
            cycle = self.cycle,
            completed = self.completed.len(),
            remaining_work = self.remaining_work(),
            "cycle finished"
        );
        Ok(())
    }

    /// Drive the simulation until every task has completed and return the
    /// final statistics. Completed schedulers return immediately, so the
    /// summary can be re-queried without advancing anything.
    ///
    /// # Errors
    ///
    /// Propagates any [`SimError`] from [`Self::step`].
    pub fn run_to_completion(&mut self) -> Result<RunSummary, SimError> {
        info!(
            tasks = self.total_tasks,
            fast = self.fast_units.len(),
            eff = self.eff_units.len(),
            "run started"
        );
        while !self.is_complete() {
            self.step()?;
        }
        let summary = self.summary();
        info!(
            cycles = summary.cycles,
            total_energy = summary.total_energy,
            "run complete"
        );
        Ok(summary)
    }

    /// Statistics for the run so far. Stable once the run has completed.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            cycles: self.cycle,
            total_energy: self.total_energy(),
            tasks_completed: self.completed.len(),
        }
    }

    /// Cycles elapsed since construction.
    #[must_use]
    pub const fn cycles(&self) -> u64 {
        self.cycle
    }

    /// Total energy consumed so far, summed over every unit.
    #[must_use]
    pub fn total_energy(&self) -> f64 {
        self.units().map(ProcessingUnit::energy_used).sum()
    }

    /// Completed work units in completion order; ties within a cycle are
    /// in unit iteration order (fast units first).
    #[must_use]
    pub fn completed_units(&self) -> &[WorkUnit] {
        &self.completed
    }

    /// Every unit in iteration order: fast units first, then efficient.
    pub fn units(&self) -> impl Iterator<Item = &ProcessingUnit> {
        self.fast_units.iter().chain(self.eff_units.iter())
    }

    /// Tasks waiting in the fast queue.
    #[must_use]
    pub fn fast_queue_len(&self) -> usize {
        self.fast_pending.len()
    }

    /// Tasks waiting in the efficient queue.
    #[must_use]
    pub fn eff_queue_len(&self) -> usize {
        self.eff_pending.len()
    }

    /// Units currently holding a work unit.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.units().filter(|unit| !unit.is_idle()).count()
    }

    /// Work remaining across both queues and all in-flight units.
    #[must_use]
    pub fn remaining_work(&self) -> f64 {
        let queued: f64 = self
            .fast_pending
            .iter()
            .chain(self.eff_pending.iter())
            .map(WorkUnit::remaining)
            .sum();
        let in_flight: f64 = self
            .units()
            .filter_map(ProcessingUnit::current)
            .map(WorkUnit::remaining)
            .sum();
        queued + in_flight
    }

    /// Number of tasks this scheduler was constructed with.
    #[must_use]
    pub const fn total_tasks(&self) -> usize {
        self.total_tasks
    }

    /// The difficulty threshold used for routing.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The configuration this scheduler was built from.
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    /// True once every task has reached the completed list.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed.len() == self.total_tasks
    }
}
