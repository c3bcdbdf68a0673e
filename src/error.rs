//! Gateway Error Types

use thiserror::Error;

/// Failure reported by a catalog gateway call.
///
/// `Remote` carries the message extracted from the response body when the
/// gateway supplied one, otherwise a per-operation fallback. Transport
/// timeouts are kept distinct so they get their own user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("request took too long")]
    Timeout,
    #[error("{0}")]
    Remote(String),
}
