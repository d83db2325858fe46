//! The outbound HTTP capability the gateway client is built on.
//!
//! The client only ever issues POSTs and only ever reads a status code and
//! a body, so the trait surface is exactly that. The `paygate-client` crate
//! ships a `reqwest`-backed implementation; tests inject recording fakes.

use crate::error::TransportError;

/// Status code and raw body of a completed POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Capability to issue a single HTTP POST with headers and an optional body.
///
/// Implementations own any deadline or connection policy; the client adds
/// none of its own.
pub trait HttpPoster: Send + Sync {
    fn post(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: Option<&[u8]>,
    ) -> impl std::future::Future<Output = Result<TransportResponse, TransportError>> + Send;
}
