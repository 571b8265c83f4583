//! HTTP client for the Hot Pepper Gourmet search API.
//!
//! Wraps `reqwest` with API key management, query construction and typed
//! response deserialization. The API reports request errors inside a 200
//! response body; those surface as [`DirectoryError::Api`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::DirectoryError;
use crate::query::{DirectoryQuery, VenueDirectory};
use crate::types::{ApiResponse, RawVenueRecord};

const DEFAULT_BASE_URL: &str = "https://webservice.recruit.co.jp/hotpepper/gourmet/v1/";

/// Client for the Hot Pepper Gourmet search endpoint.
///
/// Use [`HotpepperClient::new`] for production or
/// [`HotpepperClient::with_base_url`] to point at a mock server in tests.
pub struct HotpepperClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl HotpepperClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, DirectoryError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DirectoryError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, DirectoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so query pairs attach to the endpoint
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| DirectoryError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Searches shops matching `query`.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Http`] on network failure or non-2xx HTTP status.
    /// - [`DirectoryError::Api`] if the body carries an `error` list.
    /// - [`DirectoryError::Deserialize`] if the body does not match the
    ///   expected envelope.
    pub async fn search_shops(
        &self,
        query: &DirectoryQuery,
    ) -> Result<Vec<RawVenueRecord>, DirectoryError> {
        let url = self.build_url(query);
        tracing::debug!(
            keyword = %query.keyword,
            genre = ?query.genre,
            budget = ?query.budget,
            count = query.count,
            "querying venue directory"
        );

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: ApiResponse =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Deserialize {
                context: format!("shop search(keyword={})", query.keyword),
                source: e,
            })?;

        if let Some(first) = envelope.results.error.into_iter().next() {
            return Err(DirectoryError::Api {
                code: first.code,
                message: first.message,
            });
        }

        Ok(envelope.results.shop)
    }

    /// Builds the request URL. The API key is included, so the result must
    /// never be logged.
    fn build_url(&self, query: &DirectoryQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("keyword", &query.keyword);
            if let Some(genre) = query.genre {
                pairs.append_pair("genre", genre);
            }
            for code in query.budget {
                pairs.append_pair("budget", code);
            }
            pairs.append_pair("count", &query.count.to_string());
            pairs.append_pair("format", "json");
        }
        url
    }
}

#[async_trait]
impl VenueDirectory for HotpepperClient {
    async fn search(&self, query: &DirectoryQuery) -> Result<Vec<RawVenueRecord>, DirectoryError> {
        self.search_shops(query).await
    }
}
