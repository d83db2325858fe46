//! Payment gateway client SDK.
//!
//! Builds signed JSON requests for the four gateway operations (reserve,
//! confirm, capture, void), dispatches them over an injected HTTP
//! transport, and normalizes every outcome into a uniform [`GatewayResult`].
//!
//! # Quick Example
//!
//! ```no_run
//! use paygate_client::{GatewayConfig, PaymentGatewayClient, PaymentRequest};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = GatewayConfig::from_env().unwrap();
//! let client = PaymentGatewayClient::new(config);
//!
//! let result = client
//!     .process_payment(&PaymentRequest {
//!         product_name: "Widget".to_string(),
//!         amount: "1000".to_string(),
//!         currency: "USD".to_string(),
//!         order_id: "ORD-1".to_string(),
//!         confirm_url: "https://shop.example.com/confirm".to_string(),
//!         ..Default::default()
//!     })
//!     .await;
//!
//! if result.is_success() {
//!     println!("redirect payer to {:?}", result.payment_url());
//! }
//! # }
//! ```

mod client;
mod config;
mod http_poster;

pub use client::PaymentGatewayClient;
pub use config::{ConfigError, Endpoints, GatewayConfig, GatewayCredentials};
pub use http_poster::ReqwestPoster;

// Re-export commonly needed types from core
pub use paygate::{
    ConfirmRequest, GatewayResponse, GatewayResult, GatewayStatus, HttpPoster, PaymentInfo,
    PaymentRequest, PaymentUrls, RuleValidator, TransportError, TransportResponse,
    ValidationErrors, Validator,
};
