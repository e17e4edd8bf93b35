//! # Routes
//!
//! Axum router configuration for the payment-sheet API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /payment-sheet - Initialize a payment sheet (customer + ephemeral
///   key + payment intent); any other method gets 405 with a plain-text body
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the endpoint is called from mobile/web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/payment-sheet",
            post(handlers::create_payment_sheet).fallback(handlers::method_not_allowed),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
