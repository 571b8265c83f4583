use thiserror::Error;

/// Errors returned while talking to the venue directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory answered with an `error` list instead of shops.
    #[error("directory API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid directory base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
