//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! Keys are loaded from environment variables.

use std::env;

/// Stripe API version the ephemeral-key call is pinned to. Ephemeral keys are
/// version-sensitive: the secret only works with client SDKs speaking the same
/// version, so this is sent explicitly rather than relying on the account default.
pub const STRIPE_API_VERSION: &str = "2023-08-16";

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// Publishable key (pk_test_... or pk_live_...), surfaced verbatim to clients
    pub publishable_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version pinned for ephemeral keys
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Env vars:
    /// - `STRIPE_SECRET_KEY`
    /// - `STRIPE_PUBLISHABLE_KEY`
    ///
    /// A missing key is not a startup error: the value stays empty and the
    /// provider calls fail downstream, matching the original service behavior.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key = env::var("STRIPE_SECRET_KEY").unwrap_or_default();
        let publishable_key = env::var("STRIPE_PUBLISHABLE_KEY").unwrap_or_default();

        if secret_key.is_empty() {
            tracing::warn!("STRIPE_SECRET_KEY not set; Stripe calls will fail");
        }

        Self {
            secret_key,
            publishable_key,
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: STRIPE_API_VERSION.to_string(),
        }
    }

    /// Create config with explicit values (for testing)
    pub fn new(secret_key: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            publishable_key: publishable_key.into(),
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: STRIPE_API_VERSION.to_string(),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
