use serde::{Deserialize, Serialize};
use crate::models::domain::{
    BookRecord, CafeRecord, LocationInfo, MovieRecord, PlaylistRecord, RecipeRecord,
};

/// Composite response for the vibe planner endpoint
///
/// Every provider list is independently optional-empty; an all-empty
/// response is still a success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibeResponse {
    pub vibe: String,
    pub spotify_playlists: Vec<PlaylistRecord>,
    pub youtube_recipes: Vec<RecipeRecord>,
    pub books: Vec<BookRecord>,
    pub movies: Vec<MovieRecord>,
    pub cafes: Vec<CafeRecord>,
    pub location_info: LocationInfo,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Service self-description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutResponse {
    pub name: String,
    pub description: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
