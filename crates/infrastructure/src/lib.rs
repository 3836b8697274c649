//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the place service and map adapters, configuration loading,
//! transit fixture loading and logging setup.

pub mod adapters;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;

pub use adapters::*;
pub use config::{AppConfig, DataConfig, GeoLocationConfig, LoggingConfig, MapsAppConfig};
pub use error::InfrastructureError;
pub use fixtures::{TransitFixture, load_transit_data};
pub use logging::{build_filter, init_logging};
