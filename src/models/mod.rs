// src/models/mod.rs

pub mod problem;

pub use problem::Problem;
