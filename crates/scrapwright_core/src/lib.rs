//! Core data types for the Scrapwright generation service.
//!
//! This crate owns the request-scoped data model, its validation, and the
//! two prompt fragments sent to the completion provider.

mod freakyness;
mod prompt;
mod request;

pub use freakyness::Freakyness;
pub use prompt::{PromptFragments, SYSTEM_INSTRUCTION};
pub use request::{GenerationRequest, ScrapwoodPiece};
