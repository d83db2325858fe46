use thiserror::Error;

/// Errors surfaced by an [`HttpPoster`](crate::transport::HttpPoster)
/// implementation.
///
/// The client never propagates these to callers; they collapse into a
/// `Failed` result with an empty response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connection(String),
}
