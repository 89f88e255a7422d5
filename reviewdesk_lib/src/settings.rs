//! Runtime settings read from the environment.

use std::time::Duration;

use reviewdesk_api::Client;

use crate::error::ReviewDeskError;

/// Base URL used when `REVIEWDESK_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub const BASE_URL_VAR: &str = "REVIEWDESK_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "REVIEWDESK_HTTP_TIMEOUT_SECS";

/// Where the backend lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    /// `None` leaves the transport default in place.
    pub http_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: None,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, so callers can supply their own
    /// source of variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let http_timeout = lookup(TIMEOUT_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}", TIMEOUT_VAR, raw);
                None
            }
        });

        Self {
            api_base_url,
            http_timeout,
        }
    }

    /// Builds the API client these settings describe.
    pub fn build_client(&self) -> Result<Client, ReviewDeskError> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ReviewDeskError::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                BASE_URL_VAR, self.api_base_url
            )));
        }
        let client = match self.http_timeout {
            Some(timeout) => Client::with_timeout(&self.api_base_url, timeout)?,
            None => Client::new(&self.api_base_url)?,
        };
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn reads_base_url_and_timeout() {
        let settings = Settings::from_lookup(lookup_from(&[
            (BASE_URL_VAR, " https://reviews.example.com "),
            (TIMEOUT_VAR, "15"),
        ]));
        assert_eq!(settings.api_base_url, "https://reviews.example.com");
        assert_eq!(settings.http_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn invalid_or_zero_timeout_is_ignored() {
        let settings = Settings::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")]));
        assert!(settings.http_timeout.is_none());
        let settings = Settings::from_lookup(lookup_from(&[(TIMEOUT_VAR, "0")]));
        assert!(settings.http_timeout.is_none());
    }

    #[test]
    fn build_client_rejects_non_http_url() {
        let settings = Settings {
            api_base_url: "ftp://example.com".to_string(),
            http_timeout: None,
        };
        assert!(matches!(
            settings.build_client(),
            Err(ReviewDeskError::Config(_))
        ));
    }

    #[test]
    fn build_client_keeps_base_url() {
        let client = Settings::default().build_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
