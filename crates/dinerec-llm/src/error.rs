use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model endpoint returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("model response parse error: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("model response contained no message content")]
    EmptyResponse,

    #[error("invalid model base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
