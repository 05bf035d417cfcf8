//! Connection parameters for the remote store and summary endpoint.

/// Environment variable holding the remote endpoint base URL.
pub const REMOTE_URL_VAR: &str = "TICKLIST_REMOTE_URL";

/// Environment variable holding the remote access key.
pub const REMOTE_KEY_VAR: &str = "TICKLIST_REMOTE_KEY";

/// Remote endpoint configuration.
///
/// Injected explicitly into the REST adapters rather than read from a hidden
/// module-level singleton, so tests can substitute their own endpoints.
/// Absence of configuration is a detectable, non-fatal condition: adapters
/// constructed without it short-circuit every operation gracefully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    base_url: String,
    api_key: String,
}

impl RemoteConfig {
    /// Creates a configuration from explicit parameters.
    ///
    /// A trailing slash on the base URL is dropped so path joins stay
    /// predictable.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base_url: base,
            api_key: api_key.into(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// Returns `None` when either variable is unset or blank.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            std::env::var(REMOTE_URL_VAR).ok(),
            std::env::var(REMOTE_KEY_VAR).ok(),
        )
    }

    /// Builds the configuration from optional raw parameter values.
    ///
    /// Returns `None` when either value is absent or blank after trimming;
    /// a whitespace-only credential counts as missing configuration, not as
    /// a credential.
    #[must_use]
    pub fn from_values(base_url: Option<String>, api_key: Option<String>) -> Option<Self> {
        let base = non_blank(base_url?)?;
        let key = non_blank(api_key?)?;
        Some(Self::new(base, key))
    }

    /// Returns the endpoint base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the access key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::RemoteConfig;

    #[test]
    fn new_strips_trailing_slashes() {
        let config = RemoteConfig::new("https://store.example//", "key");
        assert_eq!(config.base_url(), "https://store.example");
    }

    #[test]
    fn new_keeps_clean_url_untouched() {
        let config = RemoteConfig::new("https://store.example", "key");
        assert_eq!(config.base_url(), "https://store.example");
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn from_values_accepts_present_parameters() {
        let config = RemoteConfig::from_values(
            Some("https://store.example/".to_owned()),
            Some("key".to_owned()),
        );
        assert_eq!(config, Some(RemoteConfig::new("https://store.example", "key")));
    }

    #[test]
    fn from_values_trims_surrounding_whitespace() {
        let config = RemoteConfig::from_values(
            Some("  https://store.example  ".to_owned()),
            Some("  key  ".to_owned()),
        )
        .expect("configuration present");
        assert_eq!(config.base_url(), "https://store.example");
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn from_values_treats_unset_parameters_as_absent() {
        assert_eq!(
            RemoteConfig::from_values(None, Some("key".to_owned())),
            None
        );
        assert_eq!(
            RemoteConfig::from_values(Some("https://store.example".to_owned()), None),
            None
        );
    }

    #[test]
    fn from_values_treats_blank_parameters_as_absent() {
        assert_eq!(
            RemoteConfig::from_values(Some(String::new()), Some("key".to_owned())),
            None
        );
        assert_eq!(
            RemoteConfig::from_values(
                Some("https://store.example".to_owned()),
                Some("   \t".to_owned())
            ),
            None
        );
    }
}
