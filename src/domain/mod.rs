//! Domain types for Wayfinder
//!
//! Core value types threaded through the workflow: TripRequest (stage 1),
//! Place (stage 2), ItineraryEvent/Schedule (stage 3), plus the composed
//! ItineraryRequest payload.

mod itinerary;
mod place;
mod trip;

pub use itinerary::{ItineraryEvent, ItineraryRequest, Schedule};
pub use place::{Photo, Place};
pub use trip::{TripRequest, TripRequestBuilder};
