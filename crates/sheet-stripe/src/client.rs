//! # Stripe Provider
//!
//! Implementation of `PaymentSheetProvider` against Stripe's form-encoded
//! REST API: `/v1/customers`, `/v1/ephemeral_keys`, `/v1/payment_intents`.

use crate::config::StripeConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sheet_core::{
    Customer, EphemeralKey, PaymentError, PaymentIntent, PaymentIntentParams, PaymentResult,
    PaymentSheetProvider,
};
use tracing::{debug, error, info, instrument};

/// Stripe implementation of the payment-sheet provider.
///
/// Each operation is one form-encoded POST authenticated with the secret key.
pub struct StripeProvider {
    config: StripeConfig,
    client: Client,
}

impl StripeProvider {
    /// Create a new Stripe provider
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(StripeConfig::from_env())
    }

    /// The publishable key paired with this provider's secret key
    pub fn publishable_key(&self) -> &str {
        &self.config.publishable_key
    }

    /// POST a form-encoded request to the Stripe API and parse the response.
    ///
    /// `pin_api_version` adds the `Stripe-Version` header; only the
    /// ephemeral-key endpoint needs it (see `STRIPE_API_VERSION`).
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
        pin_api_version: bool,
    ) -> PaymentResult<T> {
        let url = format!("{}{}", self.config.api_base_url, path);

        let mut request = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .form(form);

        if pin_api_version {
            request = request.header("Stripe-Version", &self.config.api_version);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: path={}, status={}, body={}", path, status, body);

            // Parse Stripe error
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    provider: "stripe".to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(PaymentError::ProviderError {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentSheetProvider for StripeProvider {
    #[instrument(skip(self))]
    async fn create_customer(&self) -> PaymentResult<Customer> {
        debug!("Creating Stripe customer with no initial attributes");

        let customer: StripeCustomer = self.post_form("/v1/customers", &[], false).await?;

        info!("Created Stripe customer: id={}", customer.id);

        Ok(Customer { id: customer.id })
    }

    #[instrument(skip(self))]
    async fn create_ephemeral_key(&self, customer_id: &str) -> PaymentResult<EphemeralKey> {
        debug!("Creating Stripe ephemeral key for customer={}", customer_id);

        let form = [("customer", customer_id.to_string())];
        let key: StripeEphemeralKey = self.post_form("/v1/ephemeral_keys", &form, true).await?;

        info!("Created Stripe ephemeral key: id={}", key.id);

        Ok(EphemeralKey {
            id: key.id,
            secret: key.secret,
        })
    }

    #[instrument(skip(self, params), fields(customer_id = %params.customer_id))]
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> PaymentResult<PaymentIntent> {
        debug!(
            "Creating Stripe payment intent: amount={}, currency={}",
            params.amount,
            params.currency.as_str()
        );

        let form = [
            ("amount", params.amount.to_string()),
            ("currency", params.currency.as_str().to_string()),
            ("customer", params.customer_id.clone()),
            (
                "automatic_payment_methods[enabled]",
                params.automatic_payment_methods.to_string(),
            ),
        ];
        let intent: StripePaymentIntent = self.post_form("/v1/payment_intents", &form, false).await?;

        info!("Created Stripe payment intent: id={}", intent.id);

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCustomer {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StripeEphemeralKey {
    id: String,
    secret: String,
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STRIPE_API_VERSION;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> StripeProvider {
        let config = StripeConfig::new("sk_test_abc123", "pk_test_xyz789")
            .with_api_base_url(server.uri());
        StripeProvider::new(config)
    }

    #[tokio::test]
    async fn test_create_customer() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .and(header("Authorization", "Bearer sk_test_abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cus_123",
                "object": "customer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let customer = provider_for(&server).create_customer().await.unwrap();
        assert_eq!(customer.id, "cus_123");
    }

    #[tokio::test]
    async fn test_create_ephemeral_key_pins_api_version() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/ephemeral_keys"))
            .and(header("Stripe-Version", STRIPE_API_VERSION))
            .and(body_string_contains("customer=cus_123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ephkey_1",
                "object": "ephemeral_key",
                "secret": "ek_456"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let key = provider_for(&server)
            .create_ephemeral_key("cus_123")
            .await
            .unwrap();
        assert_eq!(key.secret, "ek_456");
    }

    #[tokio::test]
    async fn test_create_payment_intent_sends_fixed_params() {
        let server = MockServer::start().await;

        // Brackets in automatic_payment_methods[enabled] are percent-encoded
        // by the form serializer.
        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(body_string_contains("amount=103"))
            .and(body_string_contains("currency=usd"))
            .and(body_string_contains("customer=cus_123"))
            .and(body_string_contains(
                "automatic_payment_methods%5Benabled%5D=true",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pi_789",
                "object": "payment_intent",
                "client_secret": "pi_789_secret"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let intent = provider_for(&server)
            .create_payment_intent(&PaymentIntentParams::payment_sheet("cus_123"))
            .await
            .unwrap();
        assert_eq!(intent.client_secret, "pi_789_secret");
    }

    #[tokio::test]
    async fn test_stripe_error_is_mapped_to_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Invalid API Key provided",
                    "type": "invalid_request_error"
                }
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server).create_customer().await.unwrap_err();
        match err {
            PaymentError::ProviderError { provider, message } => {
                assert_eq!(provider, "stripe");
                assert_eq!(message, "Invalid API Key provided");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_keeps_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway blew up"))
            .mount(&server)
            .await;

        let err = provider_for(&server).create_customer().await.unwrap_err();
        match err {
            PaymentError::ProviderError { message, .. } => {
                assert!(message.contains("500"));
                assert!(message.contains("gateway blew up"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
