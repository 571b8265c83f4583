//! Generative chat endpoint access.
//!
//! [`ChatModel`] is the seam the recommendation pipeline depends on;
//! [`OpenAiChatClient`] implements it against any OpenAI-compatible
//! `/chat/completions` endpoint.

pub mod client;
pub mod error;

use async_trait::async_trait;

pub use client::{ChatSettings, OpenAiChatClient};
pub use error::ModelError;

/// A chat model that turns one system message and one user message into a
/// single text reply.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ModelError`] when the endpoint cannot be reached or its
    /// reply carries no text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, ModelError>;
}
