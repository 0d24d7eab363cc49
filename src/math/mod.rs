// src/math/mod.rs

pub mod analysis;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod starter;

pub use analysis::absolute_error;
pub use error::MathError;
pub use grid::linspace;
pub use integrator::{lmm3_zero, Method, SEED_PERTURBATION};
pub use starter::Starter;
