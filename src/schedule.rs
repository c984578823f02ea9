//! ScheduleModel - the generated itinerary for the Planning stage
//!
//! Owns the ordered itinerary result. The schedule is created by one fetch
//! and is terminal: events are stored verbatim, never reordered, validated,
//! or deduplicated on this side.

use tracing::{debug, error, warn};

use crate::api::TravelApi;
use crate::domain::{ItineraryEvent, ItineraryRequest, Schedule};

/// Itinerary events plus the loading flag for the Planning stage
#[derive(Debug, Default)]
pub struct ScheduleModel {
    events: Schedule,
    loading: bool,
}

impl ScheduleModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the itinerary from a composed payload
    ///
    /// One request per stage instance. On success the returned sequence
    /// replaces the schedule wholesale; on failure the error is logged and
    /// the previous value is kept (empty on first failure), so the stage
    /// renders zero items rather than an error banner.
    pub async fn generate(&mut self, api: &dyn TravelApi, request: &ItineraryRequest) {
        if self.loading {
            warn!("generate: request already in flight, ignoring");
            return;
        }
        self.loading = true;

        match api.plan_events(request).await {
            Ok(events) => {
                debug!(count = events.len(), "generate: itinerary received");
                self.events = events;
            }
            Err(e) => {
                error!(error = %e, "generate: failed to fetch event plan");
            }
        }

        self.loading = false;
    }

    /// The itinerary, in the order the service returned it
    pub fn events(&self) -> &[ItineraryEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
