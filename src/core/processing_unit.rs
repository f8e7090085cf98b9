//! Processing units: simulated cores of the two heterogeneous classes.

use std::fmt;

use tracing::trace;

use crate::core::error::SimError;
use crate::core::work_unit::WorkUnit;

/// The two core classes in a heterogeneous mix.
///
/// Fast cores finish work sooner but pay more energy per unit of work;
/// efficient cores are the opposite trade. The class tag is the only
/// distinction between cores beyond their numeric parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreClass {
    /// High-throughput core: higher speed, higher energy rate.
    Fast,
    /// Efficiency core: lower speed, lower energy rate.
    Efficient,
}

impl CoreClass {
    /// Short lowercase label used in ids, logs, and error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Efficient => "efficient",
        }
    }
}

impl fmt::Display for CoreClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single simulated core with a fixed class, speed, and energy rate.
///
/// A unit holds at most one [`WorkUnit`] at a time and accumulates energy
/// only while performing work, by exactly `work_done * energy_rate` per
/// cycle. Units are created at scheduler construction and persist for the
/// whole simulation.
#[derive(Debug, Clone)]
pub struct ProcessingUnit {
    id: String,
    class: CoreClass,
    speed: f64,
    energy_rate: f64,
    energy_used: f64,
    current: Option<WorkUnit>,
}

impl ProcessingUnit {
    /// Create an idle unit, validating that both rates are strictly
    /// positive so a run can always make progress and meter energy.
    pub(crate) fn new(
        id: impl Into<String>,
        class: CoreClass,
        speed: f64,
        energy_rate: f64,
    ) -> Result<Self, SimError> {
        if speed <= 0.0 {
            return Err(SimError::InvalidSpeed { class, speed });
        }
        if energy_rate <= 0.0 {
            return Err(SimError::InvalidEnergyRate {
                class,
                rate: energy_rate,
            });
        }
        Ok(Self {
            id: id.into(),
            class,
            speed,
            energy_rate,
            energy_used: 0.0,
            current: None,
        })
    }

    /// Identifier, `F1..Fn` for fast units and `E1..En` for efficient ones.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Class tag of this unit.
    #[must_use]
    pub const fn class(&self) -> CoreClass {
        self.class
    }

    /// Units of work performed per cycle on a sufficiently large task.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Energy consumed per unit of work performed.
    #[must_use]
    pub const fn energy_rate(&self) -> f64 {
        self.energy_rate
    }

    /// Total energy consumed by this unit so far. Monotonically
    /// non-decreasing.
    #[must_use]
    pub const fn energy_used(&self) -> f64 {
        self.energy_used
    }

    /// The work unit currently held, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&WorkUnit> {
        self.current.as_ref()
    }

    /// True iff no work unit is held.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Take ownership of a work unit.
    ///
    /// Fails with [`SimError::UnitBusy`] if a unit is already held; the
    /// assignment algorithm only ever hands work to idle units, so this is
    /// a defensive precondition check.
    pub(crate) fn assign(&mut self, unit: WorkUnit) -> Result<(), SimError> {
        if self.current.is_some() {
            return Err(SimError::UnitBusy {
                unit: self.id.clone(),
            });
        }
        trace!(unit = %self.id, task = unit.name(), "work assigned");
        self.current = Some(unit);
        Ok(())
    }

    /// Advance the held work unit by one cycle.
    ///
    /// Performs `min(remaining, speed)` units of work so the core never
    /// overworks past the finish line, and meters energy for exactly the
    /// work done. Returns the work unit if it completed this cycle; `None`
    /// when idle or when work remains.
    pub(crate) fn advance_one_cycle(&mut self) -> Option<WorkUnit> {
        let unit = self.current.as_mut()?;
        let work_done = unit.advance(self.speed);
        let finished = unit.is_complete();
        self.energy_used += work_done * self.energy_rate;
        trace!(unit = %self.id, work_done, finished, "cycle advanced");
        if finished {
            self.current.take()
        } else {
            None
        }
    }
}

impl fmt::Display for ProcessingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.current {
            Some(unit) => write!(f, "{}-{} [{unit}]", self.id, self.class),
            None => write!(f, "{}-{} [idle]", self.id, self.class),
        }
    }
}
