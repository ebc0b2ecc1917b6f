use crate::payload::NotificationPayload;
use axum::async_trait;

/// Reason code for a token the gateway rejects as malformed
pub const REASON_INVALID_TOKEN: &str = "invalid-registration-token";
/// Reason code for a token whose registration no longer exists
pub const REASON_TOKEN_NOT_REGISTERED: &str = "registration-token-not-registered";

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("registration token rejected: {reason}")]
    InvalidToken { reason: String },

    #[error("push gateway rejected message: {status}: {message}")]
    Rejected { status: String, message: String },

    #[error("push gateway request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushGateway: Send + Sync {
    ///
    /// Attempts one delivery of the payload to the device named by the
    /// registration token.
    ///
    /// ### Returns
    /// Gateway-assigned message id
    ///
    /// ### Errors
    /// - [SendError::InvalidToken] when the gateway reports the token as
    ///   permanently unusable (reason [REASON_INVALID_TOKEN] or
    ///   [REASON_TOKEN_NOT_REGISTERED])
    ///
    async fn send(&self, token: &str, payload: &NotificationPayload) -> Result<String, SendError>;
}
