//! PlaceCatalog - candidate places and the user's selection over them
//!
//! The catalog owns the candidate list returned by the recommendation
//! service and a single source of truth for selection: an ordered list of
//! selected place ids (toggle order). Per-place selection state is derived
//! on read, so there is no second representation to keep synchronized.

use tracing::{debug, error, warn};

use crate::api::TravelApi;
use crate::domain::{Place, TripRequest};

/// Candidate places plus selection state for the Selecting stage
#[derive(Debug, Default)]
pub struct PlaceCatalog {
    /// Candidate list, in the order the service returned it
    places: Vec<Place>,

    /// Selected place ids, in toggle order (not catalog order)
    selected: Vec<String>,

    /// In-flight guard: set while the one load request is outstanding
    loading: bool,
}

impl PlaceCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the candidate list for a trip
    ///
    /// One request per stage instance. On success the catalog is populated
    /// and the initial selection is seeded from the service's numeric flag
    /// (`selected == 1`). On any failure the catalog becomes empty and the
    /// error is logged, never surfaced as a blocking error.
    pub async fn load(&mut self, api: &dyn TravelApi, trip: &TripRequest) {
        if self.loading {
            warn!("load: request already in flight, ignoring");
            return;
        }
        self.loading = true;

        match api.recommend_places(trip).await {
            Ok(places) => {
                debug!(count = places.len(), "load: places fetched");
                self.selected = places
                    .iter()
                    .filter(|item| item.preselected())
                    .map(|item| item.place_id.clone())
                    .collect();
                self.places = places;
            }
            Err(e) => {
                error!(error = %e, "load: failed to fetch recommended places");
                self.places.clear();
                self.selected.clear();
            }
        }

        self.loading = false;
    }

    /// Flip the selection state of a place
    ///
    /// Removal-if-present, append-if-absent, so the id list preserves toggle
    /// order. An id not present in the catalog is a no-op.
    pub fn toggle(&mut self, place_id: &str) {
        if !self.places.iter().any(|p| p.place_id == place_id) {
            debug!(%place_id, "toggle: unknown place id, ignoring");
            return;
        }

        if let Some(pos) = self.selected.iter().position(|id| id == place_id) {
            self.selected.remove(pos);
            debug!(%place_id, "toggle: deselected");
        } else {
            self.selected.push(place_id.to_string());
            debug!(%place_id, "toggle: selected");
        }
    }

    /// Selected ids, insertion order = toggle order
    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    /// Derived per-place selection state
    pub fn is_selected(&self, place_id: &str) -> bool {
        self.selected.iter().any(|id| id == place_id)
    }

    /// Minimum-selection guard: the forward transition to itinerary
    /// generation is allowed only with at least one selected place
    pub fn can_proceed(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The full candidate list, catalog order
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Look up a place by id
    pub fn place(&self, place_id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.place_id == place_id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
