use crate::models::PlaylistRecord;
use crate::services::ProviderError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Client id/secret pair for the client-credentials flow
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Spotify playlist search adapter
///
/// Exchanges the client credentials for a short-lived bearer token on every
/// call, then runs a playlist search with it. Both base URLs are injected
/// so tests can point the client at a stub server.
pub struct SpotifyClient {
    accounts_url: String,
    api_url: String,
    credentials: Option<SpotifyCredentials>,
    client: Client,
}

impl SpotifyClient {
    pub fn new(
        accounts_url: String,
        api_url: String,
        credentials: Option<SpotifyCredentials>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            accounts_url,
            api_url,
            credentials,
            client,
        }
    }

    /// Exchange client credentials for an access token
    async fn fetch_token(&self) -> Result<String, ProviderError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)?;

        let url = format!("{}/api/token", self.accounts_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Token request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        json.get("access_token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ProviderError::InvalidResponse("Missing access_token".into()))
    }

    /// Search playlists matching the derived query
    pub async fn fetch_playlists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<PlaylistRecord>, ProviderError> {
        let token = self.fetch_token().await?;

        let url = format!(
            "{}/v1/search?q={}&type=playlist&limit={}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(query),
            limit
        );

        tracing::debug!("Searching playlists: {}", url);

        let response = self.client.get(&url).bearer_auth(&token).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Playlist search failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        Ok(parse_playlists(&json, limit))
    }
}

/// Map the raw search payload into playlist records
///
/// Null entries in the items array are skipped; a payload without a
/// playlists/items structure maps to no records.
fn parse_playlists(json: &Value, limit: usize) -> Vec<PlaylistRecord> {
    let items = json
        .get("playlists")
        .and_then(|p| p.get("items"))
        .and_then(Value::as_array);

    let Some(items) = items else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| !item.is_null())
        .take(limit)
        .map(|item| PlaylistRecord {
            name: item
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
            link: item
                .get("external_urls")
                .and_then(|urls| urls.get("spotify"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            image: item
                .get("images")
                .and_then(Value::as_array)
                .and_then(|images| images.first())
                .and_then(|image| image.get("url"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}
