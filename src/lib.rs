//! # Coremix
//!
//! A cycle-driven scheduling simulator for heterogeneous core mixes.
//!
//! This library models an asymmetric processor, a pool of FAST (performance)
//! and EFF (efficiency) cores, executing a batch of tasks, so that different
//! core-mix configurations can be compared on two axes: completion time in
//! cycles and total energy consumed.
//!
//! ## Core Problem Solved
//!
//! Heterogeneous processors trade throughput against energy: a performance
//! core finishes work sooner but burns more energy per unit of work, while an
//! efficiency core is slower and cheaper. Whether a workload should run on
//! 4 fast cores, 4 efficient cores, or a 2+2 mix is not obvious from the task
//! list alone. Coremix answers that question deterministically:
//!
//! - **Difficulty routing**: tasks above a difficulty threshold queue for
//!   FAST cores, the rest for EFF cores
//! - **Cross-type fallback**: an idle core drains the other class's queue
//!   rather than sit idle while work is waiting
//! - **Discrete cycles**: every core advances its held task once per cycle by
//!   its class speed, accruing `work_done × energy_rate`
//! - **Bounded runs**: a cycle budget yields partial-completion statistics
//!   and a remaining-cycle estimate instead of running to the end
//!
//! ## Example
//!
//! A single fast core (speed 1.5) working through a difficulty-5 task needs
//! `ceil(5 / 1.5) = 4` cycles:
//!
//! ```
//! use coremix::config::SimConfig;
//! use coremix::core::Scheduler;
//! use coremix::workload::TaskSpec;
//!
//! # fn main() -> Result<(), coremix::core::SimError> {
//! let cfg = SimConfig::default().with_fast_units(1).with_eff_units(0);
//! let tasks = vec![TaskSpec::new("TranscribeDebate", 5.0)];
//!
//! let mut sim = Scheduler::new(tasks, cfg)?;
//! let summary = sim.run_to_completion()?;
//!
//! assert_eq!(summary.cycles, 4);
//! assert_eq!(summary.tasks_completed, 1);
//! # Ok(())
//! # }
//! ```
//!
//! For bounded runs and the remaining-cycle estimator, see
//! [`core::BoundedScheduler`]. For complete scenarios, see:
//! - `tests/scheduler_test.rs` - routing, fallback, and conservation checks
//! - `tests/bounded_run_test.rs` - cycle budgets and estimation
//! - `tests/stress_test.rs` - edge-case workloads and core-mix comparisons

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// The scheduling engine: work units, processing units, and the run drivers.
pub mod core;
/// Configuration models for core mixes, class parameters, and thresholds.
pub mod config;
/// Workload construction: task specs, JSON parsing, and named presets.
pub mod workload;
/// Shared utilities.
pub mod util;
