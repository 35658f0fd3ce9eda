//! Errors raised while talking to the completion provider.

use derive_more::{Display, Error};

/// Transport-level failures of the outbound provider call.
///
/// A non-success HTTP status is not a `ProviderError`: the provider client
/// hands status and body back to the caller, which decides what to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ProviderErrorKind {
    /// Request never completed (DNS, connect, TLS, reset)
    #[display("Provider request failed: {}", _0)]
    Transport(String),
    /// Response arrived but its body could not be read
    #[display("Failed to read provider response body: {}", _0)]
    ResponseBody(String),
    /// Outbound payload could not be serialised
    #[display("Failed to encode provider request: {}", _0)]
    RequestEncoding(String),
}

/// Provider error with location tracking.
///
/// # Examples
///
/// ```
/// use scrapwright_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Transport("connection refused".into()));
/// assert!(err.to_string().contains("connection refused"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
