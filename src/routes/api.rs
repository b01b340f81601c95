use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::QuoteSource;
use std::sync::Arc;

/// Body sent to the caller whenever the upstream cannot deliver a quote
pub const QUOTE_FAILURE_MESSAGE: &str = "Failed to fetch quote";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteSource>,
}

impl AppState {
    pub fn new(quotes: Arc<dyn QuoteSource>) -> Self {
        Self { quotes }
    }
}

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/quote", web::get().to(get_quote));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Quote proxy endpoint
///
/// GET /api/quote
///
/// Relays the upstream JSON body unmodified. Any upstream failure becomes:
/// ```json
/// { "error": "Failed to fetch quote" }
/// ```
/// with status 500. Nothing is retried or cached.
async fn get_quote(state: web::Data<AppState>) -> impl Responder {
    match state.quotes.fetch_quote().await {
        Ok(quote) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(quote.into_bytes()),
        Err(e) => {
            tracing::error!("Error fetching quote: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(QUOTE_FAILURE_MESSAGE))
        }
    }
}
