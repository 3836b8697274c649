//! Domain layer for CityBus
//!
//! Contains the bus network's entities (stops, routes, live buses), the
//! value objects they are built from, and domain errors. This layer does no
//! I/O and defines the ubiquitous language used by the other crates.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
