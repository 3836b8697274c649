//! Application services - Use case implementations

pub mod journey_search;
pub mod live_tracking;
pub mod map_scene;
pub mod map_view;
pub mod nearby_stops;
pub mod place_picker;
pub mod route_board;
pub mod route_matcher;
pub mod stop_suggestions;
mod transit_data_store;

pub use journey_search::{Endpoint, InputMode, JourneySearch, SearchPhase, SelectionState};
pub use live_tracking::{BusStatus, live_statuses};
pub use map_scene::{
    DEFAULT_CENTER, DEFAULT_ZOOM, MapLayers, MapScene, Marker, MarkerDetail, MarkerDiff,
    MarkerKey, Polyline,
};
pub use map_view::{MapStatus, MapView};
pub use nearby_stops::{NearbyStop, WALKING_SPEED_M_PER_MIN, nearby_stops, walking_minutes};
pub use place_picker::{CURRENT_LOCATION_LABEL, PlacePicker};
pub use route_board::{RouteBoardEntry, route_board};
pub use route_matcher::find_routes;
pub use stop_suggestions::suggest;
pub use transit_data_store::TransitDataStore;
