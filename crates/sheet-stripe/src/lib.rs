//! # sheet-stripe
//!
//! Stripe provider for the payment-sheet-rs service.
//!
//! Implements the `sheet_core::PaymentSheetProvider` capability against
//! Stripe's REST API with three operations:
//!
//! 1. **Create customer** - `POST /v1/customers`, no initial attributes
//! 2. **Create ephemeral key** - `POST /v1/ephemeral_keys`, scoped to the
//!    customer and pinned to a fixed `Stripe-Version`
//! 3. **Create payment intent** - `POST /v1/payment_intents` with automatic
//!    payment methods enabled
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheet_stripe::StripeProvider;
//! use sheet_core::{PaymentIntentParams, PaymentSheetProvider};
//!
//! // Reads STRIPE_SECRET_KEY / STRIPE_PUBLISHABLE_KEY from the environment
//! let provider = StripeProvider::from_env();
//!
//! let customer = provider.create_customer().await?;
//! let key = provider.create_ephemeral_key(&customer.id).await?;
//! let intent = provider
//!     .create_payment_intent(&PaymentIntentParams::payment_sheet(&customer.id))
//!     .await?;
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::StripeProvider;
pub use config::{StripeConfig, STRIPE_API_VERSION};
