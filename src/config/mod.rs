//! Configuration models for pool sizes, class rates, and routing.

pub mod sim;

pub use sim::{ClassParams, SimConfig, DEFAULT_THRESHOLD};
