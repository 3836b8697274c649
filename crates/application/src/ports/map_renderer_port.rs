//! Map renderer port
//!
//! The core never creates or destroys marker objects itself. It hands the
//! renderer a [`MarkerDiff`] against what is already on screen plus the full
//! set of route polylines, and the adapter applies them.

#[cfg(test)]
use mockall::automock;

use domain::value_objects::GeoLocation;

use crate::error::ApplicationError;
use crate::services::{MarkerDiff, Polyline};

/// Port for a map widget
#[cfg_attr(test, automock)]
pub trait MapRendererPort: Send {
    /// Load the widget and centre it
    ///
    /// Failure is reported as [`ApplicationError::MapUnavailable`].
    fn initialize(&mut self, center: GeoLocation, zoom: u8) -> Result<(), ApplicationError>;

    /// Apply a marker diff and replace the drawn polylines
    fn apply(&mut self, diff: &MarkerDiff, polylines: &[Polyline]) -> Result<(), ApplicationError>;
}
