//! Utility functions used across the application.
//!
//! - [`code_generator`] - Deterministic short code generation

pub mod code_generator;
