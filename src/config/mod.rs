// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::IntegrationParameters;
pub use scenario::{InstabilityExperiment, MultipleRootExperiment, Scenario, ZeroInstabilityExperiment};
