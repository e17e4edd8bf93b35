//! # Request Handlers
//!
//! Axum request handlers for the payment-sheet API.
//!
//! The payment-sheet handler runs three strictly sequential provider calls.
//! Failures map positionally to fixed plain-text messages; the underlying
//! provider error is logged, never surfaced to the caller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use sheet_core::PaymentIntentParams;
use tracing::{error, info, instrument};

/// Successful payment-sheet response.
///
/// Field order is part of the wire contract consumed by the mobile SDKs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSheetResponse {
    /// Payment intent client secret
    pub payment_intent: String,
    /// Ephemeral key secret
    pub ephemeral_key: String,
    /// Customer identifier
    pub customer: String,
    /// Publishable key from process configuration
    pub publishable_key: String,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "payment-sheet",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for non-POST methods on /payment-sheet.
///
/// No provider call is attempted; the body is fixed plain text.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Initialize a payment sheet.
///
/// Creates a customer, an ephemeral key scoped to it, and a payment intent,
/// in that order, and returns the three secrets plus the publishable key.
/// Any request body is ignored; every call creates a brand-new customer.
///
/// If the ephemeral-key or payment-intent step fails, the customer created in
/// the first step is left behind in the provider. There is no compensating
/// delete; callers see only the failed step's message.
#[instrument(skip(state))]
pub async fn create_payment_sheet(
    State(state): State<AppState>,
) -> Result<Json<PaymentSheetResponse>, (StatusCode, &'static str)> {
    let customer = state.provider.create_customer().await.map_err(|e| {
        error!("Customer creation failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create customer")
    })?;

    let ephemeral_key = state
        .provider
        .create_ephemeral_key(&customer.id)
        .await
        .map_err(|e| {
            error!("Ephemeral key creation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create ephemeral key",
            )
        })?;

    let intent = state
        .provider
        .create_payment_intent(&PaymentIntentParams::payment_sheet(&customer.id))
        .await
        .map_err(|e| {
            error!("Payment intent creation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create payment intent",
            )
        })?;

    info!(
        "Payment sheet initialized: customer={}, intent={}",
        customer.id, intent.id
    );

    Ok(Json(PaymentSheetResponse {
        payment_intent: intent.client_secret,
        ephemeral_key: ephemeral_key.secret,
        customer: customer.id,
        publishable_key: state.publishable_key.clone(),
    }))
}
