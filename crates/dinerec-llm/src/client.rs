//! OpenAI-compatible chat completion client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ChatModel;

/// Error bodies are echoed into [`ModelError::UnexpectedStatus`] up to this
/// many characters.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Generation parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4-turbo".to_string(),
            temperature: 0.7,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for `POST {base_url}/chat/completions`.
pub struct OpenAiChatClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    settings: ChatSettings,
}

impl OpenAiChatClient {
    /// # Errors
    ///
    /// Returns [`ModelError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ModelError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(
        api_key: &str,
        base_url: &str,
        settings: ChatSettings,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| ModelError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            settings,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }
}

#[async_trait]
impl ChatModel for OpenAiChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ModelError> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.settings.temperature,
        };

        tracing::debug!(
            model = %self.settings.model,
            prompt_chars = user.chars().count(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ModelError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(ModelError::Deserialize)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ModelError::EmptyResponse)?;

        tracing::debug!(reply_chars = content.chars().count(), "chat completion received");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_chat_completions_once() {
        let client = OpenAiChatClient::new(
            "sk",
            "https://api.openai.com/v1/",
            ChatSettings::default(),
            30,
            "ua",
        )
        .unwrap();
        assert_eq!(
            client.endpoint.as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = OpenAiChatClient::new("sk", "::nope", ChatSettings::default(), 30, "ua");
        assert!(matches!(result, Err(ModelError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn request_serializes_system_then_user() {
        let request = ChatRequest {
            model: "m",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hello",
                },
            ],
            temperature: 0.5,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert_eq!(json["temperature"], 0.5);
    }
}
