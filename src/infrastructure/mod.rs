//! Infrastructure layer module
//!
//! External integrations behind the domain ports:
//! - Anthropic Messages API client
//! - Configuration loading
//! - Logging

pub mod anthropic;
pub mod config;
pub mod logging;
