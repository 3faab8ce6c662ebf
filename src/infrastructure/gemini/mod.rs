// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter implementing the [`TextRemover`] port.
//!
//! Sends the image inline to `models/{model}:generateContent` and decodes the
//! first image part of the reply. Wire shapes and parsing live in [`wire`] so
//! they can be tested without a network.
//!
//! [`TextRemover`]: crate::application::port::TextRemover

pub mod wire;

use crate::application::port::text_removal::{RemoteError, RemoteResult, TextRemover};
use crate::config::{RemoteConfig, CONNECT_TIMEOUT_SECS};
use crate::domain::image::{EditedImage, SourceImage};
use futures_util::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini image editing endpoint.
///
/// Cloning is cheap: the underlying `reqwest::Client` and settings are shared.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    url: String,
    api_key: String,
    prompt: String,
    model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("url", &self.inner.url)
            .field("model", &self.inner.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Builds a client from settings, reading the key from the configured
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::MissingApiKey`] when the variable is unset or
    /// blank, or [`RemoteError::Client`] if the HTTP client cannot be built.
    pub fn from_config(config: &RemoteConfig) -> RemoteResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RemoteError::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;

        Self::with_api_key(config, api_key)
    }

    /// Builds a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Client`] if the HTTP client cannot be built.
    pub fn with_api_key(config: &RemoteConfig, api_key: String) -> RemoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(concat!("TextEraser/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RemoteError::Client(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                url: generate_content_url(&config.endpoint, &config.model),
                api_key,
                prompt: config.prompt.clone(),
                model: config.model.clone(),
            }),
        })
    }

    /// Returns the full `generateContent` URL this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    async fn send(inner: Arc<Inner>, image: SourceImage) -> RemoteResult<EditedImage> {
        let encoded = wire::encode_image(image.bytes());
        let body = wire::GenerateContentRequest::new(image.mime().as_str(), &encoded, &inner.prompt);

        tracing::info!(
            model = %inner.model,
            file = image.file_name(),
            mime = %image.mime(),
            bytes = image.bytes().len(),
            "requesting text removal"
        );

        let response = inner
            .http
            .post(&inner.url)
            .header(API_KEY_HEADER, &inner.api_key)
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let text = response.text().await.map_err(network_error)?;

        if !status.is_success() {
            let err = wire::parse_error(status.as_u16(), &text);
            tracing::warn!(status = status.as_u16(), error = %err, "text removal rejected");
            return Err(err);
        }

        let edited = wire::parse_response(&text);
        match &edited {
            Ok(image) => tracing::info!(
                mime = %image.mime(),
                bytes = image.bytes().len(),
                "text removal succeeded"
            ),
            Err(err) => tracing::warn!(error = %err, "text removal returned no image"),
        }
        edited
    }
}

impl TextRemover for GeminiClient {
    fn remove_text(&self, image: SourceImage) -> BoxFuture<'static, RemoteResult<EditedImage>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(Self::send(inner, image))
    }

    fn describe(&self) -> String {
        format!("gemini ({})", self.inner.model)
    }
}

fn generate_content_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model.trim()
    )
}

fn network_error(err: reqwest::Error) -> RemoteError {
    tracing::warn!(error = %err, "text removal request failed");
    if err.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::Network(err.to_string())
    }
}
