//! Application layer - Use cases and orchestration
//!
//! Holds the transit snapshot, the stop suggestion filter, the route
//! matcher and the journey search session, plus the ports implemented by
//! infrastructure adapters (place service, device location, map widget).

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
