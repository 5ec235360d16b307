//! Application services.
//!
//! One use case, one orchestrator: `ScaffoldGenerator` drives the whole
//! generation workflow against the driven ports.

pub mod generator_service;

pub use generator_service::{GeneratorConfig, ScaffoldGenerator};
