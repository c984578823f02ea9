//! Itinerary domain types
//!
//! The itinerary service returns an ordered sequence of scheduled events.
//! Ordering is itinerary order (chronological) and is never changed on this
//! side. Beyond the well-known display fields the events are opaque, so
//! anything unrecognized is carried in a flattened map.

use serde::{Deserialize, Serialize};

/// One scheduled item in the generated itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryEvent {
    /// Name of the place or activity
    pub name: String,

    /// What to do there
    pub details: String,

    /// When to be there (e.g. "9:00 AM to 10:30 AM")
    pub timing: String,

    /// The service capitalizes this key on the wire
    #[serde(rename = "Famous Activity")]
    pub famous_activity: String,

    /// Expected time spent (e.g. "1-2 hours")
    pub total_duration: String,

    /// Suggested way of getting there
    pub recommended_transport: String,

    /// Anything else worth knowing
    pub additional_notes: String,

    /// Fields this client does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The full generated itinerary, replaced wholesale on regeneration
pub type Schedule = Vec<ItineraryEvent>;

/// Payload sent to the itinerary service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    /// One line per selected place, catalog order
    pub selected_places: String,

    /// Planning directive interpolating the trip parameters
    pub user_input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_event() {
        let json = r#"{
            "place_id": 0,
            "name": "Burj Khalifa",
            "details": "Start your day early to avoid long queues.",
            "timing": "9:00 AM to 10:30 AM",
            "Famous Activity": "Photoshoots",
            "total_duration": "1-2 hours",
            "recommended_transport": "Taxi",
            "additional_notes": "Bring water."
        }"#;

        let event: ItineraryEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.name, "Burj Khalifa");
        assert_eq!(event.famous_activity, "Photoshoots");
        assert_eq!(event.recommended_transport, "Taxi");
        // Unrecognized fields land in the flattened map
        assert_eq!(event.extra["place_id"], 0);
    }

    #[test]
    fn test_deserialize_sparse_event() {
        let event: ItineraryEvent = serde_json::from_str(r#"{"name": "Louvre"}"#).unwrap();

        assert_eq!(event.name, "Louvre");
        assert_eq!(event.timing, "");
        assert!(event.extra.is_empty());
    }

    #[test]
    fn test_itinerary_request_wire_names() {
        let request = ItineraryRequest {
            selected_places: "NAME: 'Louvre' ...".to_string(),
            user_input: "You are an event planner ...".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("selectedPlaces").is_some());
        assert!(json.get("userInput").is_some());
        assert!(json.get("selected_places").is_none());
    }
}
