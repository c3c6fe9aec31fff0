//! Logging infrastructure
//!
//! Structured logging with tracing and tracing-subscriber: pretty or JSON
//! console output on stderr, plus an optional rolling JSON log file.

pub mod logger;

pub use logger::LoggerImpl;
