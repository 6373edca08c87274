//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

/// Endpoint the form posts to when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/users";

/// Minimum time the loading indicator stays visible per submission.
pub const DEFAULT_MIN_LOADING_MS: u64 = 2000;

/// Where and how the form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL of the users collection
    pub endpoint: Url,
    /// Floor on the loading duration
    pub min_loading: Duration,
}

impl ClientConfig {
    /// Build a config from an endpoint string and a floor in milliseconds.
    pub fn new(endpoint: &str, min_loading_ms: u64) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            endpoint: url,
            min_loading: Duration::from_millis(min_loading_ms),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT)
                .unwrap_or_else(|error| panic!("default endpoint failed to parse: {error}")),
            min_loading: Duration::from_millis(DEFAULT_MIN_LOADING_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_local_users_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.min_loading, Duration::from_millis(2000));
    }

    #[test]
    fn rejects_malformed_url() {
        let err = ClientConfig::new("not a url", 0).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://127.0.0.1/users", 0).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedScheme("ftp".to_string()));
    }

    #[test]
    fn accepts_custom_endpoint_and_floor() {
        let config = ClientConfig::new("https://api.example.com/v1/users", 500).unwrap();
        assert_eq!(config.endpoint.host_str(), Some("api.example.com"));
        assert_eq!(config.min_loading, Duration::from_millis(500));
    }
}
