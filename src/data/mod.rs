//! Core data models for Recipe Deck
//!
//! Wire-format DTOs for the remote recipe feed and the fetched-list wrapper
//! handed to the rest of the application.

pub mod recipes;

pub use recipes::{RecipeClient, RecipeError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recipe from the remote feed
///
/// Field names follow the wire schema; only the identifier is renamed
/// (`uuid` on the wire). The photo and link fields are optional in the feed
/// and stay optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier for the recipe
    #[serde(rename = "uuid")]
    pub id: String,
    /// Human-readable recipe name
    pub name: String,
    /// Cuisine the recipe belongs to
    pub cuisine: String,
    /// URL of the full-size photo, if any
    pub photo_url_large: Option<String>,
    /// URL of the thumbnail photo, if any
    pub photo_url_small: Option<String>,
    /// Link to the original recipe page, if any
    pub source_url: Option<String>,
    /// Link to a video walkthrough, if any
    pub youtube_url: Option<String>,
}

/// Top-level envelope of the recipe feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    /// All recipes in the feed
    pub recipes: Vec<Recipe>,
}

/// A fetched recipe list with its retrieval timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeList {
    /// Recipes as returned by the feed
    pub recipes: Vec<Recipe>,
    /// When this data was fetched
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"{
        "recipes": [
            {
                "uuid": "0c6ca6e7-e32a-4053-b824-1dbf749910d8",
                "name": "Apam Balik",
                "cuisine": "Malaysian",
                "photo_url_large": "https://example.com/large/apam.jpg",
                "photo_url_small": "https://example.com/small/apam.jpg",
                "source_url": "https://example.com/apam-balik",
                "youtube_url": "https://www.youtube.com/watch?v=6R8ffRRJcrg"
            },
            {
                "uuid": "599344f4-3c5c-4cca-b914-2210e3b3312f",
                "name": "Blackberry Fool",
                "cuisine": "British"
            }
        ]
    }"#;

    #[test]
    fn test_decode_sample_feed() {
        let response: RecipeResponse =
            serde_json::from_str(SAMPLE_FEED).expect("Sample feed should decode");

        assert_eq!(response.recipes.len(), 2);
        let first = &response.recipes[0];
        assert_eq!(first.id, "0c6ca6e7-e32a-4053-b824-1dbf749910d8");
        assert_eq!(first.name, "Apam Balik");
        assert_eq!(first.cuisine, "Malaysian");
        assert_eq!(
            first.photo_url_small.as_deref(),
            Some("https://example.com/small/apam.jpg")
        );
    }

    #[test]
    fn test_decode_tolerates_missing_optional_fields() {
        let response: RecipeResponse =
            serde_json::from_str(SAMPLE_FEED).expect("Sample feed should decode");

        let second = &response.recipes[1];
        assert_eq!(second.name, "Blackberry Fool");
        assert!(second.photo_url_large.is_none());
        assert!(second.photo_url_small.is_none());
        assert!(second.source_url.is_none());
        assert!(second.youtube_url.is_none());
    }

    #[test]
    fn test_decode_rejects_missing_required_field() {
        let malformed = r#"{"recipes": [{"uuid": "x", "name": "No Cuisine"}]}"#;
        assert!(serde_json::from_str::<RecipeResponse>(malformed).is_err());
    }

    #[test]
    fn test_recipe_serialization_roundtrip() {
        let response: RecipeResponse =
            serde_json::from_str(SAMPLE_FEED).expect("Sample feed should decode");
        let json = serde_json::to_string(&response.recipes[0]).expect("Should serialize");

        assert!(json.contains("\"uuid\""), "id should serialize under its wire name");
        let back: Recipe = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back.id, response.recipes[0].id);
    }
}
