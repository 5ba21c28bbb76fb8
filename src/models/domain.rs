use serde::{Deserialize, Serialize};

/// A playlist found for the vibe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub name: String,
    pub link: String,
    pub image: String,
}

/// A recipe video found for the vibe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    pub link: String,
}

/// A book found for the vibe
///
/// Title and link may be absent in the upstream volume info; they are kept
/// as nulls rather than dropping the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub link: Option<String>,
}

/// A movie or series found for the vibe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

/// A cafe found near (or described by) the requested location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafeRecord {
    pub name: String,
    pub address: String,
    pub rating: CafeRating,
    pub maps_link: String,
    pub search_strategy: String,
}

/// Cafe rating: a numeric score when the place has one, a placeholder
/// string when it does not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CafeRating {
    Score(f64),
    Unrated(String),
}

impl CafeRating {
    pub fn unrated() -> Self {
        CafeRating::Unrated("No rating".to_string())
    }
}

/// Geographic coordinates resolved from a location string
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// What the caller told us about their location, and what we resolved it to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub provided: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl LocationInfo {
    pub fn none() -> Self {
        Self {
            provided: None,
            coordinates: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_record_serializes_type_field() {
        let movie = MovieRecord {
            title: "Arrival".to_string(),
            year: "2016".to_string(),
            media_type: "movie".to_string(),
        };

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["type"], "movie");
        assert!(json.get("media_type").is_none());
    }

    #[test]
    fn test_cafe_rating_serializes_as_number_or_string() {
        let scored = serde_json::to_value(CafeRating::Score(4.5)).unwrap();
        assert_eq!(scored, serde_json::json!(4.5));

        let unrated = serde_json::to_value(CafeRating::unrated()).unwrap();
        assert_eq!(unrated, serde_json::json!("No rating"));
    }

    #[test]
    fn test_book_record_keeps_missing_fields_as_null() {
        let book = BookRecord {
            title: None,
            authors: vec![],
            link: None,
        };

        let json = serde_json::to_value(&book).unwrap();
        assert!(json["title"].is_null());
        assert!(json["link"].is_null());
        assert_eq!(json["authors"], serde_json::json!([]));
    }
}
