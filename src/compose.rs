//! Itinerary request composition
//!
//! Transforms the curated place subset plus the trip parameters into the
//! two-field payload the itinerary service expects: a text block describing
//! the selected places and a natural-language planning directive.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{ItineraryRequest, Place, TripRequest};

/// Compose the itinerary service payload
///
/// The place lines are filtered from the catalog by selection membership, in
/// CATALOG order (not toggle order). Returns `None` when there is nothing to
/// compose - the Planning stage entered without a curated selection renders
/// its empty state instead of failing.
pub fn compose(places: &[Place], selected_ids: &[String], trip: &TripRequest) -> Option<ItineraryRequest> {
    let chosen: Vec<&Place> = places
        .iter()
        .filter(|place| selected_ids.iter().any(|id| id == &place.place_id))
        .collect();

    if chosen.is_empty() {
        debug!("compose: no selected places, skipping composition");
        return None;
    }

    let selected_places = chosen.iter().map(|place| describe(place)).collect::<Vec<_>>().join("\n");

    let user_input = format!(
        "You are an event planner and your task is to plan a series of events for a group of tourists \
         visiting the region of {} between {} to {}. They have a budget of {}, so plan accordingly.",
        trip.destination,
        render_date(trip.departure_date),
        render_date(trip.return_date),
        trip.budget,
    );

    debug!(lines = chosen.len(), "compose: payload built");
    Some(ItineraryRequest {
        selected_places,
        user_input,
    })
}

/// One line per place; the reasons clause appears only when type tags exist
fn describe(place: &Place) -> String {
    let mut line = format!(
        "NAME: '{}' is located in {}, and has a rating of {}. It was chosen by the user",
        place.name, place.formatted_address, place.rating
    );
    if !place.types.is_empty() {
        line.push_str(&format!(" because of the following reasons: {}", place.types.join(", ")));
    }
    line
}

fn render_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
