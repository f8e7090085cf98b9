//! Simulation configuration structures.

use serde::{Deserialize, Serialize};

/// Default difficulty threshold: strictly above routes to the fast queue.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

fn default_fast_units() -> usize {
    2
}

fn default_eff_units() -> usize {
    2
}

fn default_fast_params() -> ClassParams {
    ClassParams::new(1.5, 1.33)
}

fn default_eff_params() -> ClassParams {
    ClassParams::new(1.0, 1.0)
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Per-class rate parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassParams {
    /// Units of work performed per cycle.
    pub speed: f64,
    /// Energy consumed per unit of work performed.
    pub energy_rate: f64,
}

impl ClassParams {
    /// Create a parameter pair.
    #[must_use]
    pub const fn new(speed: f64, energy_rate: f64) -> Self {
        Self { speed, energy_rate }
    }
}

/// Simulation configuration: pool sizes, per-class rates, and the routing
/// threshold.
///
/// The defaults describe the canonical big/little mix: two fast units at
/// speed 1.5 costing 1.33 energy per unit of work, two efficient units at
/// speed 1.0 costing 1.0, split at difficulty 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of fast units in the pool.
    #[serde(default = "default_fast_units")]
    pub fast_units: usize,
    /// Number of efficient units in the pool.
    #[serde(default = "default_eff_units")]
    pub eff_units: usize,
    /// Fast-class rates.
    #[serde(default = "default_fast_params")]
    pub fast: ClassParams,
    /// Efficient-class rates.
    #[serde(default = "default_eff_params")]
    pub eff: ClassParams,
    /// Difficulty threshold for queue routing.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fast_units: default_fast_units(),
            eff_units: default_eff_units(),
            fast: default_fast_params(),
            eff: default_eff_params(),
            threshold: default_threshold(),
        }
    }
}

impl SimConfig {
    /// Set the fast unit count.
    #[must_use]
    pub const fn with_fast_units(mut self, fast_units: usize) -> Self {
        self.fast_units = fast_units;
        self
    }

    /// Set the efficient unit count.
    #[must_use]
    pub const fn with_eff_units(mut self, eff_units: usize) -> Self {
        self.eff_units = eff_units;
        self
    }

    /// Set the fast-class rates.
    #[must_use]
    pub const fn with_fast_params(mut self, fast: ClassParams) -> Self {
        self.fast = fast;
        self
    }

    /// Set the efficient-class rates.
    #[must_use]
    pub const fn with_eff_params(mut self, eff: ClassParams) -> Self {
        self.eff = eff;
        self
    }

    /// Set the routing threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.fast.speed.is_finite() || self.fast.speed <= 0.0 {
            return Err("fast speed must be a positive finite number".into());
        }
        if !self.fast.energy_rate.is_finite() || self.fast.energy_rate <= 0.0 {
            return Err("fast energy_rate must be a positive finite number".into());
        }
        if !self.eff.speed.is_finite() || self.eff.speed <= 0.0 {
            return Err("eff speed must be a positive finite number".into());
        }
        if !self.eff.energy_rate.is_finite() || self.eff.energy_rate <= 0.0 {
            return Err("eff energy_rate must be a positive finite number".into());
        }
        if !self.threshold.is_finite() {
            return Err("threshold must be finite".into());
        }
        Ok(())
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
