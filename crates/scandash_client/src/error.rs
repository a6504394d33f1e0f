use thiserror::Error;

/// Failure taxonomy for every request this client issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request could not be sent or its response not received.
    #[error("network error: {0}")]
    Network(String),
    /// The response body is not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Non-success HTTP status; `body` is the raw payload for display.
    #[error("server error (status {status}): {body}")]
    Server { status: u16, body: String },
}

impl ClientError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}
