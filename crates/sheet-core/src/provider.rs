//! # Payment Sheet Provider Trait
//!
//! Capability interface for the three provider operations the payment-sheet
//! flow needs: create a customer, mint an ephemeral key for that customer,
//! and create a payment intent. The HTTP layer only ever talks to this trait,
//! so tests can substitute a fake provider and exercise every failure branch
//! deterministically.

use crate::error::PaymentResult;
use crate::money::Currency;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed amount (minor currency units) charged per payment-sheet intent.
pub const PAYMENT_SHEET_AMOUNT: i64 = 103;

/// A customer record created in the external payment processor.
///
/// Only the identifier is carried; everything else about the customer lives
/// in the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Opaque provider-assigned identifier (e.g. `cus_...`)
    pub id: String,
}

/// A short-lived credential scoped to one customer, handed to client SDKs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EphemeralKey {
    /// Opaque provider-assigned identifier (e.g. `ephkey_...`)
    pub id: String,
    /// The secret the client SDK presents to the provider
    pub secret: String,
}

/// An intended charge created in the external payment processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Opaque provider-assigned identifier (e.g. `pi_...`)
    pub id: String,
    /// Client-side secret used to confirm the payment
    pub client_secret: String,
}

/// Parameters for creating a payment intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentParams {
    /// Amount in the smallest currency unit
    pub amount: i64,
    /// Charge currency
    pub currency: Currency,
    /// Customer the intent is associated with
    pub customer_id: String,
    /// Let the provider pick eligible payment methods for the client
    pub automatic_payment_methods: bool,
}

impl PaymentIntentParams {
    /// Parameters for the fixed payment-sheet charge: 103 minor units, USD,
    /// automatic payment methods enabled. Request input never influences these.
    pub fn payment_sheet(customer_id: impl Into<String>) -> Self {
        Self {
            amount: PAYMENT_SHEET_AMOUNT,
            currency: Currency::USD,
            customer_id: customer_id.into(),
            automatic_payment_methods: true,
        }
    }
}

/// Core trait for payment provider implementations.
///
/// The three operations are strictly sequential in the payment-sheet flow:
/// each consumes the identifier produced by the previous one, so none may be
/// parallelized.
#[async_trait]
pub trait PaymentSheetProvider: Send + Sync {
    /// Create a customer record with no initial attributes.
    async fn create_customer(&self) -> PaymentResult<Customer>;

    /// Mint an ephemeral key scoped to `customer_id`.
    async fn create_ephemeral_key(&self, customer_id: &str) -> PaymentResult<EphemeralKey>;

    /// Create a payment intent.
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> PaymentResult<PaymentIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedPaymentSheetProvider = Arc<dyn PaymentSheetProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_sheet_params_are_fixed() {
        let params = PaymentIntentParams::payment_sheet("cus_123");

        assert_eq!(params.amount, 103);
        assert_eq!(params.currency, Currency::USD);
        assert_eq!(params.customer_id, "cus_123");
        assert!(params.automatic_payment_methods);
    }
}
