//! Core types and traits for the paygate payment gateway adapter.
//!
//! - [`PaymentRequest`] / [`ConfirmRequest`]: typed request records
//! - [`GatewayResponse`]: the decoded gateway response envelope
//! - [`GatewayResult`]: the uniform result shape returned by every operation
//! - [`Validator`]: field-level validation of a request before dispatch
//! - [`HttpPoster`]: the outbound HTTP capability the client is built on
//!
//! See the `paygate-client` crate for the concrete client that wires these
//! together over `reqwest`.

pub mod constants;
pub mod error;
pub mod payment;
pub mod response;
pub mod result;
pub mod transport;
pub mod validation;

// Re-exports
pub use constants::*;
pub use error::TransportError;
pub use payment::{ConfirmRequest, PaymentRequest};
pub use response::{GatewayResponse, PaymentInfo, PaymentUrls};
pub use result::{GatewayResult, GatewayStatus, ResultData, ValidationErrors};
pub use transport::{HttpPoster, TransportResponse};
pub use validation::{Rule, RuleValidator, Validator, CONFIRM_RULES, PROCESS_PAYMENT_RULES};
