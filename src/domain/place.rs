//! Place domain type
//!
//! A Place is one candidate point of interest returned by the recommendation
//! service. Deserialization is lenient: the service's records come from an
//! upstream search API and routinely omit fields, so everything defaults
//! rather than failing the whole response.

use serde::{Deserialize, Deserializer, Serialize};

/// One candidate point of interest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    /// Identity key, unique across the candidate list
    pub place_id: String,

    /// Display name
    pub name: String,

    /// Human-readable address
    pub formatted_address: String,

    /// Average rating (0 when the service omits it)
    pub rating: f64,

    /// How many ratings the average is based on
    pub user_ratings_total: u64,

    /// Ordered type tags (e.g. "landmark", "museum")
    pub types: Vec<String>,

    /// Photo entries; only the first reference is ever used
    pub photos: Vec<Photo>,

    /// Truthy numeric pre-selection flag as sent by the service.
    ///
    /// The wire contract is `selected == 1` means pre-selected. The service
    /// has been observed sending both numbers and booleans, so both are
    /// accepted; anything else reads as 0.
    #[serde(deserialize_with = "selected_flag")]
    pub selected: i64,
}

impl Place {
    /// Does the service consider this place pre-selected?
    pub fn preselected(&self) -> bool {
        self.selected == 1
    }
}

/// One photo entry on a place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    /// Opaque token used to build the external photo URL
    pub photo_reference: Option<String>,
}

/// Accept the selection flag as a number or a boolean, defaulting to 0
fn selected_flag<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().unwrap_or(0),
        serde_json::Value::Bool(true) => 1,
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "place_id": "p1",
            "name": "Eiffel Tower",
            "formatted_address": "Champ de Mars, Paris",
            "rating": 4.8,
            "user_ratings_total": 145000,
            "types": ["landmark"],
            "photos": [{"photo_reference": "abc", "height": 400}],
            "selected": 1
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.place_id, "p1");
        assert_eq!(place.name, "Eiffel Tower");
        assert_eq!(place.rating, 4.8);
        assert_eq!(place.types, vec!["landmark"]);
        assert_eq!(place.photos[0].photo_reference.as_deref(), Some("abc"));
        assert!(place.preselected());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let json = r#"{"place_id": "p2", "name": "Louvre", "rating": 4.7}"#;

        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.place_id, "p2");
        assert_eq!(place.formatted_address, "");
        assert_eq!(place.user_ratings_total, 0);
        assert!(place.types.is_empty());
        assert!(place.photos.is_empty());
        assert_eq!(place.selected, 0);
        assert!(!place.preselected());
    }

    #[test]
    fn test_selected_flag_accepts_boolean() {
        let place: Place = serde_json::from_str(r#"{"place_id": "p1", "selected": true}"#).unwrap();
        assert_eq!(place.selected, 1);

        let place: Place = serde_json::from_str(r#"{"place_id": "p1", "selected": false}"#).unwrap();
        assert_eq!(place.selected, 0);
    }

    #[test]
    fn test_selected_flag_garbage_reads_as_zero() {
        let place: Place = serde_json::from_str(r#"{"place_id": "p1", "selected": "yes"}"#).unwrap();
        assert_eq!(place.selected, 0);
    }

    #[test]
    fn test_photo_without_reference() {
        let json = r#"{"place_id": "p1", "photos": [{"width": 400}]}"#;
        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.photos.len(), 1);
        assert!(place.photos[0].photo_reference.is_none());
    }
}
