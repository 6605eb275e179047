//! Recipe feed client
//!
//! Fetches the recipe list from the remote JSON endpoint and maps failures
//! to messages suitable for direct display.

use super::{RecipeList, RecipeResponse};
use chrono::Utc;
use reqwest::Client;
use thiserror::Error;

/// Default endpoint serving the recipe feed
const RECIPES_ENDPOINT: &str = "https://d3jbb8n5wk0qxi.cloudfront.net/recipes.json";

/// Errors that can occur when fetching the recipe list
#[derive(Debug, Error)]
pub enum RecipeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status other than 200
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// Failed to parse the feed body
    #[error("Failed to parse recipe data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RecipeError {
    /// Maps the error to a message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            RecipeError::Http(err) if err.is_connect() => {
                "No internet connection. Please check your network settings and try again."
                    .to_string()
            }
            RecipeError::Http(err) if err.is_timeout() => {
                "Request timed out. Please try again.".to_string()
            }
            RecipeError::Http(err) => format!("Network error: {}", err),
            RecipeError::Status(_) => "Server error. Please try again later.".to_string(),
            RecipeError::Parse(_) => {
                "Error parsing recipe data. Please try again later.".to_string()
            }
        }
    }
}

/// Client for fetching the recipe list
#[derive(Debug, Clone)]
pub struct RecipeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Feed URL (allows override for testing)
    base_url: String,
}

impl RecipeClient {
    /// Creates a new RecipeClient against the default feed endpoint
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: RECIPES_ENDPOINT.to_string(),
        }
    }

    /// Creates a new RecipeClient with a custom feed URL (for testing or
    /// mirrors)
    #[allow(dead_code)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    /// Fetches and decodes the recipe list
    ///
    /// # Returns
    /// * `Ok(RecipeList)` stamped with the fetch time
    /// * `Err(RecipeError)` if the request fails, the server answers with a
    ///   non-200 status, or the body is not a valid feed
    pub async fn fetch_recipes(&self) -> Result<RecipeList, RecipeError> {
        let response = self.http_client.get(&self.base_url).send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(RecipeError::Status(status));
        }

        let body = response.text().await?;
        let decoded: RecipeResponse = serde_json::from_str(&body)?;

        Ok(RecipeList {
            recipes: decoded.recipes,
            fetched_at: Utc::now(),
        })
    }
}

impl Default for RecipeClient {
    fn default() -> Self {
        Self::new()
    }
}
