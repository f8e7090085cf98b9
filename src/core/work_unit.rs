//! Work units: atomic tasks with a fixed cost and mutable progress.

use std::fmt;

/// An atomic piece of work with a fixed total cost and a mutable remainder.
///
/// A `WorkUnit` is created once from a (name, difficulty) pair when the
/// scheduler is constructed. Its remaining work is decremented only by the
/// [`ProcessingUnit`](crate::core::ProcessingUnit) currently holding it, and
/// it moves to the completed list the cycle the remainder first reaches zero.
///
/// Invariant: `0 <= remaining <= difficulty` for the unit's whole lifetime.
#[derive(Debug, Clone)]
pub struct WorkUnit {
    name: String,
    difficulty: f64,
    remaining: f64,
}

impl WorkUnit {
    /// Create a work unit with its remainder initialized to the difficulty.
    pub(crate) fn new(name: impl Into<String>, difficulty: f64) -> Self {
        Self {
            name: name.into(),
            difficulty,
            remaining: difficulty,
        }
    }

    /// Task name as supplied at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total difficulty, fixed for the unit's lifetime.
    #[must_use]
    pub const fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Work still to be done.
    #[must_use]
    pub const fn remaining(&self) -> f64 {
        self.remaining
    }

    /// True once the remaining work has reached zero.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Perform up to `speed` units of work, clamped to the remainder so a
    /// core can never overwork past the finish line within one cycle.
    ///
    /// Returns the work actually done.
    pub(crate) fn advance(&mut self, speed: f64) -> f64 {
        let work_done = self.remaining.min(speed);
        self.remaining -= work_done;
        work_done
    }
}

impl fmt::Display for WorkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(diff:{}, rem:{:.2})",
            self.name, self.difficulty, self.remaining
        )
    }
}
