//! # sheet-core
//!
//! Core types and traits for the payment-sheet-rs service.
//!
//! This crate provides:
//! - `PaymentSheetProvider` trait for implementing payment providers
//! - `Customer`, `EphemeralKey`, and `PaymentIntent` transient values
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use sheet_core::{PaymentIntentParams, PaymentSheetProvider};
//!
//! // The payment-sheet flow is three sequential provider calls:
//! let customer = provider.create_customer().await?;
//! let key = provider.create_ephemeral_key(&customer.id).await?;
//! let intent = provider
//!     .create_payment_intent(&PaymentIntentParams::payment_sheet(&customer.id))
//!     .await?;
//! ```

pub mod error;
pub mod money;
pub mod provider;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use money::Currency;
pub use provider::{
    BoxedPaymentSheetProvider, Customer, EphemeralKey, PaymentIntent, PaymentIntentParams,
    PaymentSheetProvider, PAYMENT_SHEET_AMOUNT,
};
