//! Map view
//!
//! Owns a renderer and the marker set it currently displays. A renderer
//! that fails to load leaves the view in [`MapStatus::Failed`] with a
//! rider-facing message; the rest of the app keeps working.

use std::fmt;

use domain::GeoLocation;
use tracing::{debug, info, warn};

use super::map_scene::{MapScene, Marker, MarkerDiff};
use crate::{error::ApplicationError, ports::MapRendererPort};

/// Load state of the map widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapStatus {
    /// Not initialised yet
    Loading,
    /// Ready to draw
    Ready,
    /// Initialisation failed; holds the message shown to the rider
    Failed(String),
}

/// A map widget kept in sync with successive scenes
pub struct MapView<R> {
    renderer: R,
    status: MapStatus,
    shown: Vec<Marker>,
}

impl<R> fmt::Debug for MapView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapView")
            .field("status", &self.status)
            .field("markers", &self.shown.len())
            .finish_non_exhaustive()
    }
}

impl<R: MapRendererPort> MapView<R> {
    /// Wrap a renderer; nothing is drawn until [`MapView::open`]
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            status: MapStatus::Loading,
            shown: Vec::new(),
        }
    }

    /// The wrapped renderer
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Current load state
    #[must_use]
    pub const fn status(&self) -> &MapStatus {
        &self.status
    }

    /// Markers currently on the map
    #[must_use]
    pub fn shown(&self) -> &[Marker] {
        &self.shown
    }

    /// Initialise the renderer
    pub fn open(&mut self, center: GeoLocation, zoom: u8) -> &MapStatus {
        self.status = match self.renderer.initialize(center, zoom) {
            Ok(()) => {
                info!(%center, zoom, "Map ready");
                MapStatus::Ready
            },
            Err(e) => {
                warn!(error = %e, "Map failed to load");
                MapStatus::Failed(e.user_notice())
            },
        };
        &self.status
    }

    /// Bring the map in line with `scene`
    ///
    /// Only the marker changes are sent to the renderer; polylines are
    /// replaced wholesale. Returns the diff that was applied.
    ///
    /// # Errors
    ///
    /// Returns `MapUnavailable` when the map is not ready, or whatever the
    /// renderer reports. The displayed marker set is unchanged on error.
    pub fn show(&mut self, scene: &MapScene) -> Result<MarkerDiff, ApplicationError> {
        if self.status != MapStatus::Ready {
            return Err(ApplicationError::MapUnavailable(
                "map is not loaded".to_string(),
            ));
        }

        let diff = MarkerDiff::between(&self.shown, &scene.markers);
        debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            updated = diff.updated.len(),
            "Applying marker diff"
        );
        self.renderer.apply(&diff, &scene.polylines)?;
        self.shown.clone_from(&scene.markers);
        Ok(diff)
    }
}
