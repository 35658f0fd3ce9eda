//! Read-only access to the provider credential.

/// Supplies the provider API key at request time.
///
/// `None` means the server is misconfigured; callers must not attempt an
/// outbound call.
pub trait CredentialSource: Send + Sync {
    /// Current API key, if one is configured.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from an environment variable on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Creates a source reading the named variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this source reads.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

/// Fixed key, or none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    /// Source that always returns `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    /// Source with no key configured.
    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        assert_eq!(StaticCredentials::new("abc").api_key().as_deref(), Some("abc"));
        assert_eq!(StaticCredentials::missing().api_key(), None);
        assert_eq!(StaticCredentials::new("").api_key(), None);
    }

    #[test]
    fn test_env_credentials_unset_variable() {
        let source = EnvCredentials::new("SCRAPWRIGHT_TEST_SURELY_UNSET_KEY_VARIABLE");
        assert_eq!(source.api_key(), None);
        assert_eq!(source.var(), "SCRAPWRIGHT_TEST_SURELY_UNSET_KEY_VARIABLE");
    }
}
