use crate::models::RecipeRecord;
use crate::services::ProviderError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// YouTube recipe video search adapter
pub struct YoutubeClient {
    api_url: String,
    api_key: Option<String>,
    client: Client,
}

impl YoutubeClient {
    pub fn new(api_url: String, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url,
            api_key,
            client,
        }
    }

    /// Search recipe videos for the derived query
    ///
    /// "recipe" is appended to the query so a plain mood still finds food
    /// content.
    pub async fn fetch_recipes(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RecipeRecord>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)?;

        let url = format!(
            "{}/youtube/v3/search?part=snippet&q={}&type=video&maxResults={}&key={}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(&format!("{} recipe", query)),
            limit,
            api_key
        );

        tracing::debug!("Searching recipe videos: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Recipe search failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        Ok(parse_recipes(&json, limit))
    }
}

/// Map the raw search payload into recipe records
///
/// Items without both a video id and a title are dropped.
fn parse_recipes(json: &Value, limit: usize) -> Vec<RecipeRecord> {
    let Some(items) = json.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let video_id = item
                .get("id")
                .and_then(|id| id.get("videoId"))
                .and_then(Value::as_str)?;
            let title = item
                .get("snippet")
                .and_then(|snippet| snippet.get("title"))
                .and_then(Value::as_str)?;

            Some(RecipeRecord {
                title: title.to_string(),
                link: format!("https://www.youtube.com/watch?v={}", video_id),
            })
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_recipes_maps_fields() {
        let payload = json!({
            "items": [
                {
                    "id": { "videoId": "abc123" },
                    "snippet": { "title": "Cozy soup recipe" }
                }
            ]
        });

        let records = parse_recipes(&payload, 5);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Cozy soup recipe");
        assert_eq!(records[0].link, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_parse_recipes_drops_incomplete_items() {
        let payload = json!({
            "items": [
                { "id": {}, "snippet": { "title": "No video id" } },
                { "id": { "videoId": "xyz" }, "snippet": {} },
                { "id": { "videoId": "kept" }, "snippet": { "title": "Kept" } }
            ]
        });

        let records = parse_recipes(&payload, 5);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Kept");
    }

    #[test]
    fn test_parse_recipes_handles_missing_items() {
        assert!(parse_recipes(&json!({}), 5).is_empty());
    }
}
