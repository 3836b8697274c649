//! Place search integration for CityBus
//!
//! Lets riders pick any address as a journey endpoint. Autocomplete,
//! forward geocoding and reverse geocoding go through the
//! [LocationIQ](https://locationiq.com) API, restricted to one country by
//! default.
//!
//! # Architecture
//!
//! [`PlacesClient`] defines the interface, implemented by
//! [`LocationIqPlacesClient`]. The application layer never sees this crate
//! directly; the infrastructure layer adapts it to the place search port.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{LocationIqPlacesClient, PlacesClient, PlacesConfig};
//!
//! let config = PlacesConfig {
//!     api_key: Some("pk.your-key".to_string()),
//!     ..PlacesConfig::default()
//! };
//! let client = LocationIqPlacesClient::new(&config)?;
//!
//! let places = client.autocomplete("DB Mall", 5).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{LocationIqPlacesClient, PlacesClient};
pub use config::PlacesConfig;
pub use error::PlacesError;
pub use models::Place;
