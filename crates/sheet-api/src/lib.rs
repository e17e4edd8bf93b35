//! # sheet-api
//!
//! HTTP API layer for the payment-sheet-rs service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment-sheet initialization endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/payment-sheet` | Initialize a payment sheet |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
