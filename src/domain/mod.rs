//! Domain layer: capability data, parameters, errors and the backend port.

pub mod errors;
pub mod models;
pub mod ports;
