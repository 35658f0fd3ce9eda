//! Gemini `generateContent` integration.

mod client;
mod dto;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use dto::{Content, GenerateContentRequest, GenerationConfig, Part};
