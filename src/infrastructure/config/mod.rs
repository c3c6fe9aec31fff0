//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment: defaults, project YAML files,
//! then environment overrides, validated after extraction.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
