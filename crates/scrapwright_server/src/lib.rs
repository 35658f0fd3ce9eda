//! HTTP surface of the Scrapwright generation service.
//!
//! Exposes one endpoint that accepts an object description plus a scrap wood
//! inventory, asks a completion provider for a 3D assembly, and relays the
//! provider's JSON back to the caller.

mod api;
mod config;
mod credentials;
mod error;
mod logging;
mod service;

pub use api::create_router;
pub use config::{ServerConfig, ServerConfigBuilder};
pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
pub use error::ApiError;
pub use logging::{LogFormat, init_tracing};
pub use service::GenerationService;
