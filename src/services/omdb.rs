use crate::core::keywords::genre_hints;
use crate::models::MovieRecord;
use crate::services::ProviderError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// OMDb movie search adapter
///
/// OMDb title search is literal, so a mood rarely matches on the first
/// try. The adapter walks a ladder of search terms and returns the first
/// one that yields results; a term-level failure falls through to the
/// next term rather than failing the whole lookup.
pub struct OmdbClient {
    api_url: String,
    api_key: Option<String>,
    client: Client,
}

impl OmdbClient {
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

    /// Search movies for the derived terms
    pub async fn fetch_movies(
        &self,
        terms: &[String],
        limit: usize,
    ) -> Result<Vec<MovieRecord>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)?;

        for term in search_terms(terms) {
            let url = format!(
                "{}/?apikey={}&s={}",
                self.api_url.trim_end_matches('/'),
                api_key,
                urlencoding::encode(&term)
            );

            tracing::debug!("Searching movies with term {:?}", term);

            let response = match self.client.get(&url).send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::debug!("Movie search request for {:?} failed: {}", term, e);
                    continue;
                }
            };

            if !response.status().is_success() {
                continue;
            }

            let json: Value = match response.json().await {
                Ok(json) => json,
                Err(_) => continue,
            };

            // OMDb signals "no matches" in the body, not the status code
            if json.get("Response").and_then(Value::as_str) == Some("False") {
                continue;
            }

            let movies = parse_movies(&json, limit);
            if !movies.is_empty() {
                return Ok(movies);
            }
        }

        Ok(Vec::new())
    }
}

/// Build the ladder of search terms for a set of derived keywords
///
/// The raw query first, then the query with "movie" appended, then any
/// mood-derived genre terms.
fn search_terms(terms: &[String]) -> Vec<String> {
    let query = terms.join(" ");
    let mut ladder = vec![query.clone(), format!("{} movie", query)];

    for hint in genre_hints(terms) {
        ladder.push(hint.to_string());
    }

    ladder
}

/// Map the raw search payload into movie records
fn parse_movies(json: &Value, limit: usize) -> Vec<MovieRecord> {
    let Some(results) = json.get("Search").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .filter(|entry| !entry.is_null())
        .take(limit)
        .map(|entry| MovieRecord {
            title: entry
                .get("Title")
                .and_then(Value::as_str)
                .unwrap_or("Unknown Title")
                .to_string(),
            year: entry
                .get("Year")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
            media_type: entry
                .get("Type")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_search_terms_ladder_with_genre_hints() {
        let ladder = search_terms(&terms(&["cozy", "rainy", "day"]));

        assert_eq!(
            ladder,
            vec![
                "cozy rainy day",
                "cozy rainy day movie",
                "romantic comedy",
                "drama"
            ]
        );
    }

    #[test]
    fn test_search_terms_ladder_without_hints() {
        let ladder = search_terms(&terms(&["upbeat", "workout"]));

        assert_eq!(ladder, vec!["upbeat workout", "upbeat workout movie"]);
    }

    #[test]
    fn test_parse_movies_maps_fields() {
        let payload = json!({
            "Response": "True",
            "Search": [
                { "Title": "Singin' in the Rain", "Year": "1952", "Type": "movie" }
            ]
        });

        let records = parse_movies(&payload, 5);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Singin' in the Rain");
        assert_eq!(records[0].year, "1952");
        assert_eq!(records[0].media_type, "movie");
    }

    #[test]
    fn test_parse_movies_applies_unknown_fallbacks() {
        let payload = json!({ "Search": [ {} ] });

        let records = parse_movies(&payload, 5);

        assert_eq!(records[0].title, "Unknown Title");
        assert_eq!(records[0].year, "Unknown");
        assert_eq!(records[0].media_type, "Unknown");
    }

    #[test]
    fn test_parse_movies_truncates_to_limit() {
        let payload = json!({
            "Search": [
                { "Title": "A" }, { "Title": "B" }, { "Title": "C" }
            ]
        });

        assert_eq!(parse_movies(&payload, 2).len(), 2);
    }
}
