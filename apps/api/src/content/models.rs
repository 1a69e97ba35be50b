use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parser::{ContentItem, Platform};

/// A parsed content item after it has been stored for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredContent {
    pub id: Uuid,
    pub user_id: String,
    pub platform: Platform,
    pub content: String,
    pub hashtags: Vec<String>,
    pub media_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl StoredContent {
    pub fn from_item(user_id: &str, item: ContentItem, media_urls: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            platform: item.platform,
            content: item.content,
            hashtags: item.hashtags,
            media_urls,
            created_at: Utc::now(),
        }
    }
}

fn default_platform() -> Platform {
    Platform::Linkedin
}

/// Body of `POST /api/content/parse`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub agent_response: String,
    /// Used only when the response has no platform headings.
    #[serde(default = "default_platform")]
    pub platform: Platform,
    #[serde(default)]
    pub requested_platforms: Vec<Platform>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    pub content_items: Vec<ContentItem>,
    pub completeness_score: f64,
    pub missing_platforms: Vec<Platform>,
    pub unexpected_platforms: Vec<Platform>,
}

/// Body of `POST /api/content`.
#[derive(Debug, Deserialize)]
pub struct CreateContentRequest {
    pub user_id: String,
    pub agent_response: String,
    #[serde(default = "default_platform")]
    pub platform: Platform,
    #[serde(default)]
    pub requested_platforms: Vec<Platform>,
    #[serde(default)]
    pub media_urls: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateContentResponse {
    pub items: Vec<StoredContent>,
    pub completeness_score: f64,
    pub missing_platforms: Vec<Platform>,
    pub unexpected_platforms: Vec<Platform>,
}

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    pub user_id: String,
    pub platform: Option<Platform>,
}
