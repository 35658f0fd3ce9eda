//! HTTP client for the Gemini `generateContent` endpoint.

use crate::{CompletionProvider, CompletionRequest, GenerateContentRequest, ProviderReply};
use async_trait::async_trait;
use reqwest::Client;
use scrapwright_error::{ProviderError, ProviderErrorKind};
use tracing::{debug, error, instrument};

/// Public Gemini API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for design generation.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

/// Gemini client authenticating with an API key query parameter.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client for the given model and API root.
    pub fn new(model: impl AsRef<str>, base_url: impl AsRef<str>) -> Self {
        let model = model.as_ref().to_string();
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        debug!(model = %model, url = %base_url, "Created Gemini client");

        Self {
            client: Client::new(),
            model,
            base_url,
        }
    }

    /// Full URL of the content-generation endpoint, without credentials.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    #[instrument(skip(self, api_key, request), fields(model = %self.model, temperature = request.temperature()))]
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<ProviderReply, ProviderError> {
        let payload = GenerateContentRequest::from(request);
        let body = serde_json::to_vec(&payload).map_err(|e| {
            ProviderError::new(ProviderErrorKind::RequestEncoding(e.to_string()))
        })?;

        debug!(
            fragments = request.fragments().len(),
            bytes = body.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the API key
                let e = e.without_url();
                error!(error = %e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            let e = e.without_url();
            error!(status, error = %e, "Failed to read response body");
            ProviderError::new(ProviderErrorKind::ResponseBody(e.to_string()))
        })?;

        debug!(status, bytes = text.len(), "Received response");
        Ok(ProviderReply::new(status, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new("gemini-test", "http://localhost:9999/v1beta/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
        assert_eq!(client.model_name(), "gemini-test");
    }

    #[test]
    fn test_default_targets_public_api() {
        let client = GeminiClient::default();
        assert_eq!(
            client.endpoint(),
            format!("{DEFAULT_BASE_URL}/models/{DEFAULT_MODEL}:generateContent")
        );
    }
}
