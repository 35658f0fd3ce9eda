//! Completion provider integrations for Scrapwright.
//!
//! The [`CompletionProvider`] trait is the only effectful seam of the
//! service: prompt fragments and a temperature go in, an HTTP status and the
//! raw response body come out. [`GeminiClient`] implements it against the
//! Gemini `generateContent` API.

mod gemini;
mod provider;

pub use gemini::{
    Content, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GenerateContentRequest,
    GenerationConfig, Part,
};
pub use provider::{CompletionProvider, CompletionRequest, ProviderReply};
