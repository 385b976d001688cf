use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The backend rejected the request with a structured `detail` message.
    #[error("{0}")]
    Rejected(String),
    /// Non-2xx response without a usable error body.
    #[error("HTTP {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    BadBody(String),
    #[error("could not save file: {0}")]
    Save(String),
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::Timeout;
    }
    ClientError::Network(err.to_string())
}
