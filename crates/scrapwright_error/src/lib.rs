//! Error types for the Scrapwright generation service.
//!
//! Every error carries the file and line where it was created, captured with
//! `#[track_caller]`, so a log line points straight at the failing call site.

mod config;
mod generation;
mod provider;

pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
