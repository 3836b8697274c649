//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod device_location_adapter;
mod geojson_map_renderer;
mod place_search_adapter;

pub use device_location_adapter::ConfiguredGeolocation;
pub use geojson_map_renderer::GeoJsonMapRenderer;
pub use place_search_adapter::PlaceSearchAdapter;
