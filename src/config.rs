//! Routes service configuration

use serde::{Deserialize, Serialize};

/// Environment variable holding the Bing Maps API key
pub const API_KEY_ENV: &str = "BING_MAPS_API_KEY";

/// Configuration for the Bing Maps Routes service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Base URL for the Virtual Earth REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bing Maps API key, sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of transit itineraries to request
    #[serde(default = "default_max_transit_solutions")]
    pub max_transit_solutions: u8,
}

fn default_base_url() -> String {
    "http://dev.virtualearth.net/REST/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_transit_solutions() -> u8 {
    3
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            max_transit_solutions: default_max_transit_solutions(),
        }
    }
}

impl RoutesConfig {
    /// Create a configuration with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Create a configuration from the `BING_MAPS_API_KEY` environment
    /// variable
    ///
    /// A missing variable yields an empty key rather than an error; the
    /// service rejects unauthenticated requests itself.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// The API key is deliberately not checked: an absent key surfaces as
    /// an authentication failure from the remote service.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_transit_solutions == 0 {
            return Err("max_transit_solutions must be greater than 0".to_string());
        }

        if self.max_transit_solutions > 10 {
            return Err("max_transit_solutions must be 10 or less".to_string());
        }

        Ok(())
    }
}
