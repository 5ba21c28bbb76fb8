// Integration tests for the vibe planner aggregation, with every outbound
// provider stubbed by a mockito server.

use mockito::{Server, ServerGuard};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use vibe_planner::core::Planner;
use vibe_planner::services::{
    BooksClient, OmdbClient, PlacesClient, SpotifyClient, SpotifyCredentials, YoutubeClient,
};

const TIMEOUT: Duration = Duration::from_secs(5);
const LIMIT: usize = 5;

/// Planner with every provider pointed at the same stub server
fn stub_planner(server: &ServerGuard) -> Planner {
    let url = server.url();

    Planner::new(
        Arc::new(SpotifyClient::new(
            url.clone(),
            url.clone(),
            Some(SpotifyCredentials {
                client_id: "test-client".to_string(),
                client_secret: "test-secret".to_string(),
            }),
            TIMEOUT,
        )),
        Arc::new(YoutubeClient::new(url.clone(), Some("yt-key".to_string()), TIMEOUT)),
        Arc::new(BooksClient::new(url.clone(), TIMEOUT)),
        Arc::new(OmdbClient::new(url.clone(), Some("omdb-key".to_string()), TIMEOUT)),
        Arc::new(PlacesClient::new(url, Some("maps-key".to_string()), 5000, TIMEOUT)),
        LIMIT,
    )
}

async fn mock_spotify_token(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "access_token": "test-access-token" }).to_string())
        .create_async()
        .await
}

async fn mock_spotify_search(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/v1/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "playlists": {
                    "items": [{
                        "name": "Rainy Day Jazz",
                        "external_urls": { "spotify": "https://open.spotify.com/playlist/1" },
                        "images": [{ "url": "https://i.scdn.co/image/1" }]
                    }]
                }
            })
            .to_string(),
        )
        .create_async()
        .await
}

async fn mock_youtube_search(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/youtube/v3/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [{
                    "id": { "videoId": "v1" },
                    "snippet": { "title": "Comfort food recipe" }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await
}

async fn mock_books_search(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/books/v1/volumes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [{
                    "volumeInfo": {
                        "title": "The Long Rain",
                        "authors": ["Ray Bradbury"],
                        "infoLink": "https://books.google.com/books?id=1"
                    }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await
}

async fn mock_omdb_search(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": "True",
                "Search": [{
                    "Title": "Singin' in the Rain",
                    "Year": "1952",
                    "Type": "movie"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await
}

async fn mock_geocode_ok(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/maps/api/geocode/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "OK",
                "results": [{
                    "geometry": { "location": { "lat": 18.5204, "lng": 73.8567 } }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await
}

async fn mock_nearby_search(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/maps/api/place/nearbysearch/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "OK",
                "results": [{
                    "place_id": "p1",
                    "name": "Cafe Goodluck",
                    "vicinity": "FC Road, Pune",
                    "rating": 4.4
                }]
            })
            .to_string(),
        )
        .create_async()
        .await
}

#[tokio::test]
async fn test_full_plan_with_location() {
    let mut server = Server::new_async().await;

    let _mocks = vec![
        mock_spotify_token(&mut server).await,
        mock_spotify_search(&mut server).await,
        mock_youtube_search(&mut server).await,
        mock_books_search(&mut server).await,
        mock_omdb_search(&mut server).await,
        mock_geocode_ok(&mut server).await,
        mock_nearby_search(&mut server).await,
    ];

    let planner = stub_planner(&server);
    let response = planner.plan("cozy rainy day", Some("Pune, India")).await;

    assert_eq!(response.vibe, "cozy rainy day");

    assert_eq!(response.spotify_playlists.len(), 1);
    assert_eq!(response.spotify_playlists[0].name, "Rainy Day Jazz");

    assert_eq!(response.youtube_recipes.len(), 1);
    assert_eq!(
        response.youtube_recipes[0].link,
        "https://www.youtube.com/watch?v=v1"
    );

    assert_eq!(response.books.len(), 1);
    assert_eq!(response.books[0].authors, vec!["Ray Bradbury"]);

    assert_eq!(response.movies.len(), 1);
    assert_eq!(response.movies[0].year, "1952");

    assert_eq!(response.cafes.len(), 1);
    assert_eq!(response.cafes[0].name, "Cafe Goodluck");
    assert_eq!(response.cafes[0].search_strategy, "coordinate-based");

    assert_eq!(response.location_info.provided.as_deref(), Some("Pune, India"));
    let coordinates = response.location_info.coordinates.expect("coordinates");
    assert!((coordinates.lat - 18.5204).abs() < 1e-6);
    assert!((coordinates.lng - 73.8567).abs() < 1e-6);
}

#[tokio::test]
async fn test_provider_failure_is_isolated() {
    let mut server = Server::new_async().await;

    // Spotify's token exchange breaks; every other provider works
    let _broken_token = server
        .mock("POST", "/api/token")
        .with_status(500)
        .create_async()
        .await;
    let _mocks = vec![
        mock_youtube_search(&mut server).await,
        mock_books_search(&mut server).await,
        mock_omdb_search(&mut server).await,
        mock_geocode_ok(&mut server).await,
        mock_nearby_search(&mut server).await,
    ];

    let planner = stub_planner(&server);
    let response = planner.plan("cozy rainy day", Some("Pune, India")).await;

    assert!(response.spotify_playlists.is_empty());
    assert!(!response.youtube_recipes.is_empty());
    assert!(!response.books.is_empty());
    assert!(!response.movies.is_empty());
    assert!(!response.cafes.is_empty());
    assert!(response.location_info.coordinates.is_some());
}

#[tokio::test]
async fn test_no_location_skips_geocoding_and_cafes() {
    let mut server = Server::new_async().await;

    let _mocks = vec![
        mock_spotify_token(&mut server).await,
        mock_spotify_search(&mut server).await,
        mock_youtube_search(&mut server).await,
        mock_books_search(&mut server).await,
        mock_omdb_search(&mut server).await,
    ];

    let geocode = server
        .mock("GET", "/maps/api/geocode/json")
        .expect(0)
        .create_async()
        .await;
    let nearby = server
        .mock("GET", "/maps/api/place/nearbysearch/json")
        .expect(0)
        .create_async()
        .await;

    let planner = stub_planner(&server);
    let response = planner.plan("upbeat workout", None).await;

    assert!(response.cafes.is_empty());
    assert!(response.location_info.provided.is_none());
    assert!(response.location_info.coordinates.is_none());
    assert!(!response.spotify_playlists.is_empty());
    assert!(!response.youtube_recipes.is_empty());
    assert!(!response.books.is_empty());
    assert!(!response.movies.is_empty());

    geocode.assert_async().await;
    nearby.assert_async().await;
}

#[tokio::test]
async fn test_geocode_failure_falls_back_to_text_search() {
    let mut server = Server::new_async().await;

    let _mocks = vec![
        mock_spotify_token(&mut server).await,
        mock_spotify_search(&mut server).await,
        mock_youtube_search(&mut server).await,
        mock_books_search(&mut server).await,
        mock_omdb_search(&mut server).await,
    ];

    let _geocode = server
        .mock("GET", "/maps/api/geocode/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "status": "ZERO_RESULTS", "results": [] }).to_string())
        .create_async()
        .await;

    let _text_search = server
        .mock("GET", "/maps/api/place/textsearch/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "OK",
                "results": [{
                    "place_id": "p2",
                    "name": "Vohuman Cafe",
                    "formatted_address": "Railway Station Rd, Pune",
                    "rating": 4.6
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let planner = stub_planner(&server);
    let response = planner.plan("cozy rainy day", Some("Atlantis")).await;

    assert!(response.location_info.coordinates.is_none());
    assert_eq!(response.location_info.provided.as_deref(), Some("Atlantis"));
    assert_eq!(response.cafes.len(), 1);
    assert_eq!(response.cafes[0].search_strategy, "text-based");
    // The rest of the plan is unaffected by the failed geocode
    assert!(!response.movies.is_empty());
}

#[tokio::test]
async fn test_missing_credentials_degrade_only_that_provider() {
    let mut server = Server::new_async().await;

    let _mocks = vec![
        mock_books_search(&mut server).await,
        mock_omdb_search(&mut server).await,
    ];

    let url = server.url();
    let planner = Planner::new(
        Arc::new(SpotifyClient::new(url.clone(), url.clone(), None, TIMEOUT)),
        Arc::new(YoutubeClient::new(url.clone(), None, TIMEOUT)),
        Arc::new(BooksClient::new(url.clone(), TIMEOUT)),
        Arc::new(OmdbClient::new(url.clone(), Some("omdb-key".to_string()), TIMEOUT)),
        Arc::new(PlacesClient::new(url, None, 5000, TIMEOUT)),
        LIMIT,
    );

    let response = planner.plan("cozy rainy day", None).await;

    assert!(response.spotify_playlists.is_empty());
    assert!(response.youtube_recipes.is_empty());
    assert!(!response.books.is_empty());
    assert!(!response.movies.is_empty());
}

#[tokio::test]
async fn test_same_request_twice_yields_identical_responses() {
    let mut server = Server::new_async().await;

    let _mocks = vec![
        mock_spotify_token(&mut server).await,
        mock_spotify_search(&mut server).await,
        mock_youtube_search(&mut server).await,
        mock_books_search(&mut server).await,
        mock_omdb_search(&mut server).await,
        mock_geocode_ok(&mut server).await,
        mock_nearby_search(&mut server).await,
    ];

    let planner = stub_planner(&server);

    let first = planner.plan("cozy rainy day", Some("Pune, India")).await;
    let second = planner.plan("cozy rainy day", Some("Pune, India")).await;

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_all_providers_down_still_yields_a_plan() {
    // No mocks registered at all: every outbound call fails, and the plan
    // is still assembled with empty lists
    let server = Server::new_async().await;

    let planner = stub_planner(&server);
    let response = planner.plan("quiet evening", Some("Pune, India")).await;

    assert_eq!(response.vibe, "quiet evening");
    assert!(response.spotify_playlists.is_empty());
    assert!(response.youtube_recipes.is_empty());
    assert!(response.books.is_empty());
    assert!(response.movies.is_empty());
    assert!(response.cafes.is_empty());
    assert!(response.location_info.coordinates.is_none());
}
