//! Failure modes of a single generation request.

use crate::ProviderError;
use derive_more::{Display, Error};

/// Every way a generation request can terminate without a relayed design.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum GenerationErrorKind {
    /// Request used a method other than POST
    #[display("Method Not Allowed")]
    MethodNotAllowed,
    /// Provider credential missing from server configuration
    #[display("API key is not configured on the server.")]
    Misconfigured,
    /// Required request fields missing or malformed
    #[display("Missing 'prompt' or 'scrapwood' list in the request.")]
    BadRequest,
    /// Provider answered with a non-success status
    #[display("API call failed with status: {}. Body: {}", status, body)]
    Provider {
        /// HTTP status code returned by the provider
        status: u16,
        /// Raw error body returned by the provider
        body: String,
    },
    /// Anything else: transport failure, unparseable payload
    #[display("{}", _0)]
    Unexpected(String),
}

impl GenerationErrorKind {
    /// True for failures caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MethodNotAllowed | Self::BadRequest)
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use scrapwright_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Provider {
///     status: 429,
///     body: "quota exceeded".to_string(),
/// });
/// assert_eq!(
///     err.kind.to_string(),
///     "API call failed with status: 429. Body: quota exceeded"
/// );
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<ProviderError> for GenerationError {
    #[track_caller]
    fn from(err: ProviderError) -> Self {
        Self::new(GenerationErrorKind::Unexpected(err.kind.to_string()))
    }
}
