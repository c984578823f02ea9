//! Photo and map URL resolution
//!
//! Display URLs are built client-side from a configured API key. The key is
//! injected here rather than read from ambient globals, and every field
//! access that may be absent resolves through an explicit default.

use reqwest::Url;

use crate::config::MediaConfig;
use crate::domain::Place;

/// Placeholder shown when a place carries no usable photo reference
pub const FALLBACK_PHOTO_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRq7tDgp_TYwdGlzX5KjF8KTQzJh8zQp6ow2g&s";

const PHOTO_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/photo";
const MAP_EMBED_ENDPOINT: &str = "https://www.google.com/maps/embed/v1/place";

/// Builds external photo and map-embed URLs for places
#[derive(Debug, Clone)]
pub struct MediaResolver {
    api_key: String,
    photo_max_width: u32,
}

impl MediaResolver {
    pub fn new(api_key: impl Into<String>, photo_max_width: u32) -> Self {
        Self {
            api_key: api_key.into(),
            photo_max_width,
        }
    }

    /// Create a resolver from configuration, reading the key from its env var
    ///
    /// A missing key yields an empty-key resolver: media URLs are
    /// presentation-only and must never block the workflow.
    pub fn from_config(config: &MediaConfig) -> Self {
        let api_key = config.get_api_key().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "from_config: no media API key, photo URLs will use an empty key");
            String::new()
        });
        Self::new(api_key, config.photo_max_width)
    }

    /// Display image URL for a place
    ///
    /// Uses the first photo entry's reference when present; any missing or
    /// malformed entry resolves to the fixed placeholder.
    pub fn photo_url(&self, place: &Place) -> String {
        let reference = place.photos.first().and_then(|photo| photo.photo_reference.as_deref());

        match reference {
            Some(reference) => format!(
                "{}?maxwidth={}&photoreference={}&key={}",
                PHOTO_ENDPOINT, self.photo_max_width, reference, self.api_key
            ),
            None => FALLBACK_PHOTO_URL.to_string(),
        }
    }

    /// Map-embed URL for a place, keyed on its formatted address
    pub fn map_embed_url(&self, place: &Place) -> String {
        Url::parse_with_params(
            MAP_EMBED_ENDPOINT,
            &[("key", self.api_key.as_str()), ("q", place.formatted_address.as_str())],
        )
        .map(String::from)
        .unwrap_or_else(|_| MAP_EMBED_ENDPOINT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Photo;

    fn place_with_photo(reference: Option<&str>) -> Place {
        Place {
            place_id: "p1".to_string(),
            name: "Eiffel Tower".to_string(),
            formatted_address: "Champ de Mars, Paris".to_string(),
            photos: vec![Photo {
                photo_reference: reference.map(str::to_string),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_photo_url_embeds_reference() {
        let resolver = MediaResolver::new("test-key", 400);
        let url = resolver.photo_url(&place_with_photo(Some("abc")));

        assert!(url.contains("photoreference=abc"));
        assert!(url.contains("key=test-key"));
        assert!(url.contains("maxwidth=400"));
    }

    #[test]
    fn test_photo_url_no_photos_falls_back() {
        let resolver = MediaResolver::new("test-key", 400);
        let place = Place {
            place_id: "p1".to_string(),
            ..Default::default()
        };

        assert_eq!(resolver.photo_url(&place), FALLBACK_PHOTO_URL);
    }

    #[test]
    fn test_photo_url_entry_without_reference_falls_back() {
        let resolver = MediaResolver::new("test-key", 400);

        assert_eq!(resolver.photo_url(&place_with_photo(None)), FALLBACK_PHOTO_URL);
    }

    #[test]
    fn test_map_embed_url_encodes_address() {
        let resolver = MediaResolver::new("test-key", 400);
        let url = resolver.map_embed_url(&place_with_photo(Some("abc")));

        assert!(url.starts_with("https://www.google.com/maps/embed/v1/place?"));
        assert!(url.contains("key=test-key"));
        // The address must be url-encoded
        assert!(url.contains("q=Champ+de+Mars%2C+Paris") || url.contains("q=Champ%20de%20Mars%2C%20Paris"));
    }
}
