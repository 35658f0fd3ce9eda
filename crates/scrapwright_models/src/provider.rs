//! Provider-agnostic completion interface.

use async_trait::async_trait;
use derive_getters::Getters;
use scrapwright_error::ProviderError;

/// Ordered prompt fragments plus the sampling temperature.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct CompletionRequest {
    /// Text fragments in the order the model should read them
    fragments: Vec<String>,
    /// Sampling temperature
    temperature: f64,
}

impl CompletionRequest {
    /// Creates a new completion request.
    pub fn new(fragments: Vec<String>, temperature: f64) -> Self {
        Self {
            fragments,
            temperature,
        }
    }
}

/// Status and raw body of a provider response.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ProviderReply {
    /// HTTP status code
    status: u16,
    /// Response body, unparsed
    body: String,
}

impl ProviderReply {
    /// Creates a new provider reply.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A generative completion service that returns structured JSON.
///
/// Implementations make exactly one outbound call per invocation and never
/// retry. Non-success statuses are returned as a [`ProviderReply`], not as an
/// error; `Err` is reserved for calls that produced no response at all.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the fragments and temperature, requesting JSON output.
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<ProviderReply, ProviderError>;
}
