//! Error types for simulation construction and execution.

use thiserror::Error;

use crate::core::processing_unit::CoreClass;

/// Errors produced by the simulation engine.
///
/// The taxonomy is narrow because the domain is closed: everything here is a
/// construction-time configuration failure except [`SimError::UnitBusy`],
/// which is a defensive invariant check that the assignment algorithm's own
/// idle checks keep from ever triggering.
#[derive(Debug, Error)]
pub enum SimError {
    /// Non-empty workload with zero processing units of either class.
    #[error("no processing units configured for {pending} pending tasks")]
    NoUnits {
        /// Number of tasks that would never be scheduled.
        pending: usize,
    },
    /// A unit class was configured with a speed that cannot make progress.
    #[error("{class} units require a positive speed, got {speed}")]
    InvalidSpeed {
        /// Class whose parameters were rejected.
        class: CoreClass,
        /// The offending per-cycle speed.
        speed: f64,
    },
    /// A unit class was configured with a non-positive energy rate.
    #[error("{class} units require a positive energy rate, got {rate}")]
    InvalidEnergyRate {
        /// Class whose parameters were rejected.
        class: CoreClass,
        /// The offending per-work-unit energy rate.
        rate: f64,
    },
    /// A task was supplied with a difficulty below the minimum of 1, or a
    /// non-finite one.
    #[error("task `{name}` has difficulty {difficulty}, minimum is 1")]
    InvalidDifficulty {
        /// Name of the rejected task.
        name: String,
        /// The offending difficulty value.
        difficulty: f64,
    },
    /// A work unit was assigned to a unit that already holds one.
    ///
    /// This is a programming-error class of failure: the per-cycle assignment
    /// only ever hands work to idle units, so seeing it means the caller
    /// bypassed the scheduler. It aborts the run rather than being retried.
    #[error("unit {unit} already holds a work unit")]
    UnitBusy {
        /// Identifier of the busy unit.
        unit: String,
    },
    /// Configuration-layer validation or parse failure with context.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
