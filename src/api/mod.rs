//! External travel service boundary
//!
//! The recommendation service and the itinerary service are opaque
//! request/response collaborators. The [`TravelApi`] trait is the seam:
//! the stage models take a trait object so tests can substitute fakes.

use async_trait::async_trait;

mod client;
mod error;

pub use client::HttpTravelApi;
pub use error::ApiError;

use crate::domain::{ItineraryEvent, ItineraryRequest, Place, TripRequest};

/// Client interface for both external services
#[async_trait]
pub trait TravelApi: Send + Sync {
    /// Fetch the candidate place list for a trip
    async fn recommend_places(&self, trip: &TripRequest) -> Result<Vec<Place>, ApiError>;

    /// Generate the itinerary for a composed request
    async fn plan_events(&self, request: &ItineraryRequest) -> Result<Vec<ItineraryEvent>, ApiError>;
}
