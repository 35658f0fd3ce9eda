//! Request translation: validate, build prompt, call provider, relay.

use crate::CredentialSource;
use scrapwright_core::{GenerationRequest, PromptFragments};
use scrapwright_error::{GenerationError, GenerationErrorKind};
use scrapwright_models::{CompletionProvider, CompletionRequest};
use serde_json::value::RawValue;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Turns a raw request body into the provider's JSON design.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn CompletionProvider>,
    credentials: Arc<dyn CredentialSource>,
}

impl GenerationService {
    /// Creates a service over the given provider and credential source.
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self {
            provider,
            credentials,
        }
    }

    /// The configured provider key.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::Misconfigured`] if no key is available.
    pub fn api_key(&self) -> Result<String, GenerationError> {
        self.credentials
            .api_key()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::Misconfigured))
    }

    /// Handle one generation request body.
    ///
    /// On success the provider's JSON is returned byte for byte, after
    /// checking that it parses.
    ///
    /// The credential is checked before the body, and both before any
    /// outbound call. Exactly one provider call is made for a valid request.
    ///
    /// # Errors
    ///
    /// - [`GenerationErrorKind::Misconfigured`] if no API key is available
    /// - [`GenerationErrorKind::BadRequest`] if `prompt` or `scrapwood` is missing or empty
    /// - [`GenerationErrorKind::Provider`] if the provider answers with a non-success status
    /// - [`GenerationErrorKind::Unexpected`] for transport failures and non-JSON success bodies
    #[instrument(skip_all, fields(body_len = body.len()))]
    pub async fn generate(&self, body: &[u8]) -> Result<Box<RawValue>, GenerationError> {
        let api_key = self.api_key()?;

        let request = GenerationRequest::from_slice(body)?;
        let temperature = request.freakyness().value();
        info!(
            pieces = request.scrapwood().len(),
            temperature, "Generating assembly"
        );

        let fragments = PromptFragments::for_request(&request)?;
        let completion = CompletionRequest::new(fragments.into_parts(), temperature);

        let reply = self.provider.complete(&api_key, &completion).await?;

        if !reply.is_success() {
            error!(
                status = reply.status(),
                body = %reply.body(),
                "Provider returned an error"
            );
            return Err(GenerationError::new(GenerationErrorKind::Provider {
                status: *reply.status(),
                body: reply.body().clone(),
            }));
        }

        let design: Box<RawValue> = serde_json::from_str(reply.body()).map_err(|e| {
            GenerationError::new(GenerationErrorKind::Unexpected(format!(
                "Failed to parse provider response: {}",
                e
            )))
        })?;

        debug!(bytes = reply.body().len(), "Relaying provider response");
        Ok(design)
    }
}
