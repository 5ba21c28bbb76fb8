use crate::models::BookRecord;
use crate::services::ProviderError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Google Books volume search adapter
///
/// The only provider that needs no credential.
pub struct BooksClient {
    api_url: String,
    client: Client,
}

impl BooksClient {
    pub fn new(api_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { api_url, client }
    }

    /// Search book volumes for the derived query
    pub async fn fetch_books(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<BookRecord>, ProviderError> {
        let url = format!(
            "{}/books/v1/volumes?q={}&maxResults={}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(query),
            limit
        );

        tracing::debug!("Searching books: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Book search failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        Ok(parse_books(&json, limit))
    }
}

/// Map the raw volumes payload into book records
fn parse_books(json: &Value, limit: usize) -> Vec<BookRecord> {
    let Some(items) = json.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .take(limit)
        .map(|item| {
            let info = item.get("volumeInfo").cloned().unwrap_or(Value::Null);

            BookRecord {
                title: info
                    .get("title")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                authors: info
                    .get("authors")
                    .and_then(Value::as_array)
                    .map(|authors| {
                        authors
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
                link: info
                    .get("infoLink")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }
        })
        .collect()
}
