//! Ports - Interfaces implemented by infrastructure adapters

mod geolocation_port;
mod map_renderer_port;
mod place_search_port;

pub use geolocation_port::GeolocationPort;
#[cfg(test)]
pub use geolocation_port::MockGeolocationPort;
pub use map_renderer_port::MapRendererPort;
#[cfg(test)]
pub use map_renderer_port::MockMapRendererPort;
pub use place_search_port::{PlaceCandidate, PlaceSearchPort};
#[cfg(test)]
pub use place_search_port::MockPlaceSearchPort;
