use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use vibe_planner::config::Settings;
use vibe_planner::core::Planner;
use vibe_planner::routes;
use vibe_planner::routes::planner::AppState;
use vibe_planner::services::{
    BooksClient, OmdbClient, PlacesClient, SpotifyClient, SpotifyCredentials, YoutubeClient,
};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Vibe Planner service...");

    // Load configuration; the service token and identifying number are
    // required, everything else degrades gracefully
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    let timeout = Duration::from_secs(settings.search.request_timeout_secs);

    // Initialize provider clients
    let spotify_credentials = match (
        settings.providers.spotify.client_id.clone(),
        settings.providers.spotify.client_secret.clone(),
    ) {
        (Some(client_id), Some(client_secret)) => Some(SpotifyCredentials {
            client_id,
            client_secret,
        }),
        _ => None,
    };

    let spotify = Arc::new(SpotifyClient::new(
        settings.providers.spotify.accounts_url.clone(),
        settings.providers.spotify.api_url.clone(),
        spotify_credentials,
        timeout,
    ));

    let youtube = Arc::new(YoutubeClient::new(
        settings.providers.youtube.api_url.clone(),
        settings.providers.youtube.api_key.clone(),
        timeout,
    ));

    let books = Arc::new(BooksClient::new(
        settings.providers.books.api_url.clone(),
        timeout,
    ));

    let omdb = Arc::new(OmdbClient::new(
        settings.providers.omdb.api_url.clone(),
        settings.providers.omdb.api_key.clone(),
        timeout,
    ));

    let places = Arc::new(PlacesClient::new(
        settings.providers.google_maps.api_url.clone(),
        settings.providers.google_maps.api_key.clone(),
        settings.search.place_radius_m,
        timeout,
    ));

    info!("Provider clients initialized");

    let planner = Arc::new(Planner::new(
        spotify,
        youtube,
        books,
        omdb,
        places,
        settings.search.result_limit,
    ));

    // Build application state
    let app_state = AppState {
        settings: Arc::new(settings.clone()),
        planner,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
