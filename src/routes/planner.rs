use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;
use crate::config::Settings;
use crate::core::Planner;
use crate::models::{AboutResponse, ErrorResponse, HealthResponse, VibeRequest};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub planner: Arc<Planner>,
}

/// Configure all planner routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/about", web::get().to(about))
        .route("/validate", web::get().to(validate_number))
        .route("/plan", web::post().to(plan_vibe));
}

/// Check the caller's bearer token against the configured service token
///
/// Runs before validation and before any provider call.
fn authorize(req: &HttpRequest, settings: &Settings) -> Result<(), HttpResponse> {
    let token = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "));

    match token {
        Some(token) if token == settings.auth.token => Ok(()),
        _ => Err(HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Unauthorized".to_string(),
            message: "Missing or invalid bearer token".to_string(),
            status_code: 401,
        })),
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Service self-description endpoint
async fn about(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    if let Err(response) = authorize(&http_req, &state.settings) {
        return response;
    }

    HttpResponse::Ok().json(AboutResponse {
        name: "VibePlanner".to_string(),
        description: "Plan your day with recommendations for music, books, movies, recipes \
                      and nearby cafes from just your mood"
            .to_string(),
    })
}

/// Return the configured identifying number
async fn validate_number(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    if let Err(response) = authorize(&http_req, &state.settings) {
        return response;
    }

    HttpResponse::Ok().json(&state.settings.auth.my_number)
}

/// Vibe planner endpoint
///
/// POST /api/v1/plan
///
/// Request body:
/// ```json
/// {
///   "vibe_description": "cozy rainy day",
///   "location": "Pune, India"
/// }
/// ```
///
/// Always answers 200 with the composite response once the request passes
/// authentication and validation, even if every provider came back empty.
async fn plan_vibe(
    state: web::Data<AppState>,
    req: web::Json<VibeRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    if let Err(response) = authorize(&http_req, &state.settings) {
        return response;
    }

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for plan request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Whitespace-only descriptions pass the length bound but carry nothing
    if req.vibe_description.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "vibe_description required".to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Planning vibe {:?} (location: {:?})",
        req.vibe_description,
        req.location
    );

    let response = state
        .planner
        .plan(&req.vibe_description, req.location())
        .await;

    tracing::info!(
        "Returning plan with {} playlists, {} recipes, {} books, {} movies, {} cafes",
        response.spotify_playlists.len(),
        response.youtube_recipes.len(),
        response.books.len(),
        response.movies.len(),
        response.cafes.len()
    );

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
