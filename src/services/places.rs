use crate::models::{CafeRating, CafeRecord, Coordinates};
use crate::services::ProviderError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Strategy label on cafes found via geocoded coordinates
pub const STRATEGY_COORDINATE: &str = "coordinate-based";

/// Strategy label on cafes found via plain text search
pub const STRATEGY_TEXT: &str = "text-based";

/// Google Maps adapter: geocoding plus cafe search
///
/// Serves two roles behind one API key: resolving the caller's location
/// string to coordinates, and finding cafes either around those
/// coordinates (Nearby Search) or from the location text alone
/// (Text Search) when geocoding came up empty.
pub struct PlacesClient {
    api_url: String,
    api_key: Option<String>,
    radius_m: u32,
    client: Client,
}

impl PlacesClient {
    pub fn new(api_url: String, api_key: Option<String>, radius_m: u32, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url,
            api_key,
            radius_m,
            client,
        }
    }

    /// Resolve a location string to coordinates
    ///
    /// An unresolvable or ambiguous location is `Ok(None)`, not an error;
    /// only transport and parse failures surface as `Err`.
    pub async fn geocode(&self, location: &str) -> Result<Option<Coordinates>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)?;

        let url = format!(
            "{}/maps/api/geocode/json?address={}&key={}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(location),
            api_key
        );

        tracing::debug!("Geocoding location {:?}", location);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Geocoding failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        if json.get("status").and_then(Value::as_str) != Some("OK") {
            return Ok(None);
        }

        let location = json
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .and_then(|result| result.get("geometry"))
            .and_then(|geometry| geometry.get("location"));

        let Some(location) = location else {
            return Ok(None);
        };

        match (
            location.get("lat").and_then(Value::as_f64),
            location.get("lng").and_then(Value::as_f64),
        ) {
            (Some(lat), Some(lng)) => Ok(Some(Coordinates { lat, lng })),
            _ => Ok(None),
        }
    }

    /// Search cafes around geocoded coordinates
    ///
    /// Walks a keyword ladder from vibe-specific cafes down to plain
    /// restaurants, returning the first strategy with results.
    /// REQUEST_DENIED and OVER_QUERY_LIMIT abort the ladder: later
    /// attempts would fail the same way.
    pub async fn nearby_cafes(
        &self,
        query: &str,
        coordinates: &Coordinates,
        limit: usize,
    ) -> Result<Vec<CafeRecord>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)?;

        let ladder = [
            (format!("{} cafe", query), "cafe"),
            ("cafe".to_string(), "cafe"),
            ("coffee".to_string(), "cafe"),
            ("restaurant".to_string(), "restaurant"),
        ];

        for (keyword, place_type) in &ladder {
            let url = format!(
                "{}/maps/api/place/nearbysearch/json?location={},{}&radius={}&keyword={}&type={}&key={}",
                self.api_url.trim_end_matches('/'),
                coordinates.lat,
                coordinates.lng,
                self.radius_m,
                urlencoding::encode(keyword),
                place_type,
                api_key
            );

            tracing::debug!("Nearby cafe search with keyword {:?}", keyword);

            let response = match self.client.get(&url).send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::debug!("Nearby search for {:?} failed: {}", keyword, e);
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

            match json.get("status").and_then(Value::as_str) {
                Some("OK") => {
                    let cafes = parse_cafes(&json, STRATEGY_COORDINATE, limit);
                    if !cafes.is_empty() {
                        return Ok(cafes);
                    }
                }
                Some("ZERO_RESULTS") => continue,
                Some("REQUEST_DENIED") | Some("OVER_QUERY_LIMIT") => {
                    let message = json
                        .get("error_message")
                        .and_then(Value::as_str)
                        .unwrap_or("Place search rejected")
                        .to_string();
                    return Err(ProviderError::ApiError(message));
                }
                _ => continue,
            }
        }

        Ok(Vec::new())
    }

    /// Search cafes from the location text alone
    ///
    /// Fallback for when the location string could not be geocoded.
    pub async fn text_search_cafes(
        &self,
        query: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<CafeRecord>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)?;

        let url = format!(
            "{}/maps/api/place/textsearch/json?query={}&key={}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(&format!("{} cafe in {}", query, location)),
            api_key
        );

        tracing::debug!("Text cafe search in {:?}", location);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Text search failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        if json.get("status").and_then(Value::as_str) != Some("OK") {
            return Ok(Vec::new());
        }

        Ok(parse_cafes(&json, STRATEGY_TEXT, limit))
    }
}

/// Map a place search payload into cafe records, tagging each with the
/// strategy that found it
fn parse_cafes(json: &Value, strategy: &str, limit: usize) -> Vec<CafeRecord> {
    let Some(results) = json.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .filter(|place| !place.is_null())
        .take(limit)
        .map(|place| {
            let place_id = place.get("place_id").and_then(Value::as_str).unwrap_or("");
            let maps_link = if place_id.is_empty() {
                String::new()
            } else {
                format!("https://www.google.com/maps/place/?q=place_id:{}", place_id)
            };

            // Nearby Search calls the address "vicinity"; Text Search
            // calls it "formatted_address"
            let address = place
                .get("vicinity")
                .or_else(|| place.get("formatted_address"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown Address")
                .to_string();

            let rating = place
                .get("rating")
                .and_then(Value::as_f64)
                .map(CafeRating::Score)
                .unwrap_or_else(CafeRating::unrated);

            CafeRecord {
                name: place
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown Cafe")
                    .to_string(),
                address,
                rating,
                maps_link,
                search_strategy: strategy.to_string(),
            }
        })
        .collect()
}
