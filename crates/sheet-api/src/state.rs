//! # Application State
//!
//! Shared state for the Axum application: the payment provider behind its
//! capability trait, the publishable key handed back to clients, and the
//! server configuration.

use sheet_core::BoxedPaymentSheetProvider;
use sheet_stripe::StripeProvider;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider behind the capability trait
    pub provider: BoxedPaymentSheetProvider,
    /// Publishable key surfaced verbatim in successful responses
    pub publishable_key: String,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the Stripe provider
    pub fn new() -> Self {
        let config = AppConfig::from_env();

        let stripe = StripeProvider::from_env();
        let publishable_key = stripe.publishable_key().to_string();

        Self {
            provider: Arc::new(stripe),
            publishable_key,
            config,
        }
    }

    /// Create an AppState with a substituted provider (for tests)
    pub fn with_provider(
        provider: BoxedPaymentSheetProvider,
        publishable_key: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            publishable_key: publishable_key.into(),
            config: AppConfig::from_env(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
