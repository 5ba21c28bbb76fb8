use crate::core::keywords;
use crate::models::{CafeRecord, Coordinates, LocationInfo, VibeResponse};
use crate::services::{
    BooksClient, OmdbClient, PlacesClient, ProviderError, SpotifyClient, YoutubeClient,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Aggregator for the vibe planner
///
/// Derives keywords from the vibe text, fans out to the five providers and
/// the geocoder concurrently, and assembles the composite response. Each
/// provider failure is absorbed as an empty list for that provider only;
/// the fan-out never aborts as a whole.
pub struct Planner {
    spotify: Arc<SpotifyClient>,
    youtube: Arc<YoutubeClient>,
    books: Arc<BooksClient>,
    omdb: Arc<OmdbClient>,
    places: Arc<PlacesClient>,
    result_limit: usize,
}

impl Planner {
    pub fn new(
        spotify: Arc<SpotifyClient>,
        youtube: Arc<YoutubeClient>,
        books: Arc<BooksClient>,
        omdb: Arc<OmdbClient>,
        places: Arc<PlacesClient>,
        result_limit: usize,
    ) -> Self {
        Self {
            spotify,
            youtube,
            books,
            omdb,
            places,
            result_limit,
        }
    }

    /// Build the composite plan for a vibe
    ///
    /// The caller has already validated that `vibe` is non-empty. Total
    /// latency is bounded by the slowest branch, not the sum: the four
    /// location-independent lookups and the geocode -> cafe chain run as
    /// one concurrent join.
    pub async fn plan(&self, vibe: &str, location: Option<&str>) -> VibeResponse {
        let terms = keywords::derive_keywords(vibe);
        let query = keywords::search_query(&terms);

        debug!("Derived search terms for {:?}: {:?}", vibe, terms);

        let (playlists, recipes, books, movies, (coordinates, cafes)) = tokio::join!(
            self.spotify.fetch_playlists(&query, self.result_limit),
            self.youtube.fetch_recipes(&query, self.result_limit),
            self.books.fetch_books(&query, self.result_limit),
            self.omdb.fetch_movies(&terms, self.result_limit),
            self.locate_cafes(&query, location),
        );

        VibeResponse {
            vibe: vibe.to_string(),
            spotify_playlists: unwrap_or_empty("spotify", playlists),
            youtube_recipes: unwrap_or_empty("youtube", recipes),
            books: unwrap_or_empty("books", books),
            movies: unwrap_or_empty("omdb", movies),
            cafes,
            location_info: LocationInfo {
                provided: location.map(str::to_string),
                coordinates,
            },
        }
    }

    /// Geocode the location (when given) and search cafes around it
    ///
    /// Falls back to a plain text search when the location cannot be
    /// resolved to coordinates; skips the cafe lookup entirely when no
    /// location was provided.
    async fn locate_cafes(
        &self,
        query: &str,
        location: Option<&str>,
    ) -> (Option<Coordinates>, Vec<CafeRecord>) {
        let Some(location) = location else {
            return (None, Vec::new());
        };

        let coordinates = match self.places.geocode(location).await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                warn!("Geocoding failed for {:?}: {}", location, e);
                None
            }
        };

        let cafes = match &coordinates {
            Some(coordinates) => {
                self.places
                    .nearby_cafes(query, coordinates, self.result_limit)
                    .await
            }
            None => {
                self.places
                    .text_search_cafes(query, location, self.result_limit)
                    .await
            }
        };

        (coordinates, unwrap_or_empty("places", cafes))
    }
}

/// Degrade a provider failure to an empty result list
///
/// A failed call and a call with zero matches are indistinguishable in the
/// response; the failure is only visible in the logs.
fn unwrap_or_empty<T>(provider: &str, result: Result<Vec<T>, ProviderError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!("{} lookup degraded to empty results: {}", provider, e);
            Vec::new()
        }
    }
}
