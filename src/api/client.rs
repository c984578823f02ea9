//! HTTP travel service client
//!
//! Posts JSON to the `top-places` and `event-planner` endpoints. Each call
//! is a single attempt: callers degrade to an empty result on failure, so
//! there is no retry or backoff here.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{ApiError, TravelApi};
use crate::config::ApiConfig;
use crate::domain::{ItineraryEvent, ItineraryRequest, Place, TripRequest};

/// HTTP client for the recommendation and itinerary services
pub struct HttpTravelApi {
    base_url: String,
    http: Client,
}

/// Response envelope of the recommendation service
///
/// A missing `places` key is treated as an empty candidate list.
#[derive(Debug, Deserialize)]
struct RecommendResponse {
    #[serde(default)]
    places: Vec<Place>,
}

impl HttpTravelApi {
    /// Create a new client from configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        debug!(?config, "from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }

    /// POST a JSON body and fail on any non-2xx status
    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "post_json: called");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "post_json: non-2xx status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        debug!("post_json: success");
        Ok(response)
    }
}

#[async_trait]
impl TravelApi for HttpTravelApi {
    async fn recommend_places(&self, trip: &TripRequest) -> Result<Vec<Place>, ApiError> {
        debug!(destination = %trip.destination, "recommend_places: called");
        let response = self.post_json("/api/top-places", trip).await?;
        let body: RecommendResponse = response.json().await?;
        debug!(count = body.places.len(), "recommend_places: parsed");
        Ok(body.places)
    }

    async fn plan_events(&self, request: &ItineraryRequest) -> Result<Vec<ItineraryEvent>, ApiError> {
        debug!("plan_events: called");
        let response = self.post_json("/api/event-planner", request).await?;
        // The itinerary service answers with a bare array; null reads as empty
        let body: Option<Vec<ItineraryEvent>> = response.json().await?;
        let events = body.unwrap_or_default();
        debug!(count = events.len(), "plan_events: parsed");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_response_missing_places_key() {
        let body: RecommendResponse = serde_json::from_str("{}").unwrap();
        assert!(body.places.is_empty());
    }

    #[test]
    fn test_recommend_response_with_places() {
        let json = r#"{"places": [{"place_id": "p1", "name": "Eiffel Tower", "selected": 1}]}"#;
        let body: RecommendResponse = serde_json::from_str(json).unwrap();

        assert_eq!(body.places.len(), 1);
        assert_eq!(body.places[0].place_id, "p1");
        assert!(body.places[0].preselected());
    }

    #[test]
    fn test_null_itinerary_body_reads_as_empty() {
        let body: Option<Vec<ItineraryEvent>> = serde_json::from_str("null").unwrap();
        assert!(body.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig::default();
        let client = HttpTravelApi::from_config(&config).unwrap();
        assert_eq!(client.base_url, config.base_url);
    }
}
