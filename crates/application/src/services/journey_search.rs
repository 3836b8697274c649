//! Journey search session
//!
//! Holds the rider's origin and destination picks, the text typed into both
//! inputs and the suggestion lists shown under them. The session phase is
//! derived from that state on demand:
//!
//! ```text
//! Idle ──type──▶ Suggesting ──select both──▶ Selected ──search──▶ ResultsShown
//!   ▲                                                                  │
//!   └────────────────────────────── clear ─────────────────────────────┘
//! ```
//!
//! A single pick keeps the session in `Suggesting`. `clear` is the only way
//! back to `Idle`. Typing after a pick keeps the
//! pick and keeps visible results on screen.

use std::fmt;
use std::sync::Arc;

use domain::{DomainError, ExternalStop, KnownStop, Route, Stop, value_objects::StopId};
use tracing::{debug, info};

use super::{route_matcher::find_routes, stop_suggestions::suggest, TransitDataStore};
use crate::{error::ApplicationError, ports::PlaceCandidate};

/// Which input a query or pick applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Where the rider starts
    Origin,
    /// Where the rider wants to go
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Source of the picks offered to the rider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Only the network's own stops
    #[default]
    KnownStops,
    /// Any location resolved through the place service
    AnyLocation,
}

/// Phase of the session, derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing typed, nothing picked
    Idle,
    /// Text typed or one endpoint picked
    Suggesting,
    /// Both endpoints picked
    Selected,
    /// Results are on screen
    ResultsShown,
}

/// Picks and typed text of a search session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    origin: Option<Stop>,
    destination: Option<Stop>,
    origin_text: String,
    destination_text: String,
    results_visible: bool,
}

impl SelectionState {
    /// Picked stop for an endpoint
    #[must_use]
    pub const fn stop(&self, endpoint: Endpoint) -> Option<&Stop> {
        match endpoint {
            Endpoint::Origin => self.origin.as_ref(),
            Endpoint::Destination => self.destination.as_ref(),
        }
    }

    /// Text in an endpoint's input
    #[must_use]
    pub fn text(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Origin => &self.origin_text,
            Endpoint::Destination => &self.destination_text,
        }
    }

    /// Whether results are on screen
    #[must_use]
    pub const fn results_visible(&self) -> bool {
        self.results_visible
    }

    fn set_stop(&mut self, endpoint: Endpoint, stop: Stop) {
        match endpoint {
            Endpoint::Origin => self.origin = Some(stop),
            Endpoint::Destination => self.destination = Some(stop),
        }
    }

    fn text_mut(&mut self, endpoint: Endpoint) -> &mut String {
        match endpoint {
            Endpoint::Origin => &mut self.origin_text,
            Endpoint::Destination => &mut self.destination_text,
        }
    }
}

/// Interactive origin/destination search over a transit snapshot
#[derive(Debug, Clone)]
pub struct JourneySearch {
    store: Arc<TransitDataStore>,
    mode: InputMode,
    state: SelectionState,
    origin_suggestions: Vec<StopId>,
    destination_suggestions: Vec<StopId>,
}

impl JourneySearch {
    /// Start an idle session
    #[must_use]
    pub fn new(store: Arc<TransitDataStore>) -> Self {
        Self {
            store,
            mode: InputMode::default(),
            state: SelectionState::default(),
            origin_suggestions: Vec::new(),
            destination_suggestions: Vec::new(),
        }
    }

    /// Current input mode
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.mode
    }

    /// Switch between network stops and arbitrary places
    ///
    /// Picks are kept. Stop suggestions are dropped since they belong to
    /// the other mode.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            debug!(?mode, "Switched input mode");
            self.mode = mode;
            self.origin_suggestions.clear();
            self.destination_suggestions.clear();
        }
    }

    /// Current picks and text
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Phase derived from the current state
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.state.results_visible {
            SearchPhase::ResultsShown
        } else if self.state.origin.is_some() && self.state.destination.is_some() {
            SearchPhase::Selected
        } else if self.state.origin.is_some()
            || self.state.destination.is_some()
            || !self.state.origin_text.is_empty()
            || !self.state.destination_text.is_empty()
        {
            SearchPhase::Suggesting
        } else {
            SearchPhase::Idle
        }
    }

    /// Record typed text and refresh that input's stop suggestions
    ///
    /// Suggestions are only computed in [`InputMode::KnownStops`]; place
    /// suggestions come from the place service instead.
    pub fn type_query(&mut self, endpoint: Endpoint, text: &str) {
        text.clone_into(self.state.text_mut(endpoint));

        let suggestions = match self.mode {
            InputMode::KnownStops => suggest(text, self.store.stops())
                .into_iter()
                .map(|stop| stop.id().clone())
                .collect(),
            InputMode::AnyLocation => Vec::new(),
        };
        *self.suggestion_ids_mut(endpoint) = suggestions;
    }

    /// Stops currently suggested under an input
    #[must_use]
    pub fn suggestions(&self, endpoint: Endpoint) -> Vec<&KnownStop> {
        let ids = match endpoint {
            Endpoint::Origin => &self.origin_suggestions,
            Endpoint::Destination => &self.destination_suggestions,
        };
        ids.iter().filter_map(|id| self.store.stop(id)).collect()
    }

    /// Pick a network stop for an endpoint
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` domain error when the stop is not in the
    /// snapshot; the state is left untouched.
    pub fn select_stop(&mut self, endpoint: Endpoint, id: &StopId) -> Result<(), ApplicationError> {
        let stop = self
            .store
            .stop(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Stop", id.as_str()))?;

        debug!(%endpoint, stop = %stop.id(), "Selected stop");
        stop.name().clone_into(self.state.text_mut(endpoint));
        self.state.set_stop(endpoint, stop.into());
        self.suggestion_ids_mut(endpoint).clear();
        Ok(())
    }

    /// Pick a place resolved by the place service for an endpoint
    ///
    /// Returns the identifier generated for the synthesized stop.
    pub fn select_place(&mut self, endpoint: Endpoint, place: PlaceCandidate) -> StopId {
        let stop = ExternalStop::from_place(place.address, place.location);
        let id = stop.id().clone();

        debug!(%endpoint, stop = %id, "Selected place");
        stop.name().clone_into(self.state.text_mut(endpoint));
        self.state.set_stop(endpoint, stop.into());
        self.suggestion_ids_mut(endpoint).clear();
        id
    }

    /// Show results for the current picks
    ///
    /// An endpoint without a pick is resolved from its typed text by exact
    /// stop name, ignoring case. Results are shown only when both
    /// endpoints resolve, in which case the resolved stops become the
    /// picks. Returns whether results are visible afterwards.
    pub fn search(&mut self) -> bool {
        let origin = self.resolve(Endpoint::Origin);
        let destination = self.resolve(Endpoint::Destination);

        if let (Some(origin), Some(destination)) = (origin, destination) {
            self.state.origin = Some(origin);
            self.state.destination = Some(destination);
            self.state.results_visible = true;
            self.origin_suggestions.clear();
            self.destination_suggestions.clear();
            info!("Showing journey results");
        } else {
            debug!("Search needs both endpoints");
        }

        self.state.results_visible
    }

    /// Routes linking the picks
    ///
    /// `None` until a search has shown results, so "not searched yet" and
    /// "no route" stay distinguishable.
    #[must_use]
    pub fn results(&self) -> Option<Vec<&Route>> {
        self.state.results_visible.then(|| {
            find_routes(
                self.state.origin.as_ref(),
                self.state.destination.as_ref(),
                self.store.routes(),
            )
        })
    }

    /// Forget both picks, all text and any results
    pub fn clear(&mut self) {
        debug!("Cleared journey search");
        self.state = SelectionState::default();
        self.origin_suggestions.clear();
        self.destination_suggestions.clear();
    }

    fn resolve(&self, endpoint: Endpoint) -> Option<Stop> {
        self.state.stop(endpoint).cloned().or_else(|| {
            self.store
                .stop_named(self.state.text(endpoint))
                .cloned()
                .map(Stop::from)
        })
    }

    fn suggestion_ids_mut(&mut self, endpoint: Endpoint) -> &mut Vec<StopId> {
        match endpoint {
            Endpoint::Origin => &mut self.origin_suggestions,
            Endpoint::Destination => &mut self.destination_suggestions,
        }
    }
}
