//! Core simulation engine: work units, processing units, and the drivers.

pub mod bounded;
pub mod error;
pub mod processing_unit;
pub mod scheduler;
pub mod work_unit;

pub use bounded::{BoundedRunReport, BoundedScheduler};
pub use error::{AppResult, SimError};
pub use processing_unit::{CoreClass, ProcessingUnit};
pub use scheduler::{RunSummary, Scheduler};
pub use work_unit::WorkUnit;
