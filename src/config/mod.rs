//! Configuration model for picdiff.
//!
//! This module defines the Config struct that represents `.picdiff.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, validation, and environment overrides.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
