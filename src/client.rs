//! Bing Maps route client
//!
//! Issues one HTTP GET per route request against the Virtual Earth REST
//! API and normalizes the outcome: parsed [`RouteResponse`] on a 2xx
//! status, [`RouteError`] otherwise. Each call is a single linear
//! pipeline with no state between calls.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::RoutesConfig;
use crate::error::RouteError;
use crate::models::RouteResponse;
use crate::options::RouteOptions;
use crate::query::build_query_string;

/// Trait for route service clients
#[async_trait]
pub trait RouteClient: Send + Sync {
    /// Get public transit directions between two addresses, departing now
    async fn get_transit_route(
        &self,
        start_location: &str,
        end_location: &str,
    ) -> Result<RouteResponse, RouteError>;

    /// Get walking directions between two addresses
    async fn get_walking_route(
        &self,
        start_location: &str,
        end_location: &str,
    ) -> Result<RouteResponse, RouteError>;

    /// Get driving directions between two addresses
    async fn get_driving_route(
        &self,
        start_location: &str,
        end_location: &str,
    ) -> Result<RouteResponse, RouteError>;
}

/// Virtual Earth REST client implementation
#[derive(Debug)]
pub struct BingRouteClient {
    client: Client,
    config: RoutesConfig,
}

impl BingRouteClient {
    /// Create a new route client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(config: &RoutesConfig) -> Result<Self, RouteError> {
        config.validate().map_err(RouteError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("bing-routes/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RouteError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Assemble the full request URL: base URL, mode resource path, and
    /// the encoded query string
    ///
    /// Waypoints and key lead the query; the mode-specific parameters
    /// follow. The key is always sent, even when empty — an invalid key
    /// is the service's call to reject, not ours.
    fn build_request_url(&self, options: &RouteOptions, start: &str, end: &str) -> String {
        let mode_params = options.query_params();

        let mut params: Vec<(&str, &str)> = vec![
            ("wp.0", start),
            ("wp.1", end),
            ("key", &self.config.api_key),
        ];
        params.extend(mode_params.iter().map(|(key, value)| (*key, value.as_str())));

        format!(
            "{}/{}{}",
            self.config.base_url,
            options.mode().resource_path(),
            build_query_string(params)
        )
    }

    /// Parse a success body into the typed response
    fn parse_route_response(body: &str) -> Result<RouteResponse, RouteError> {
        serde_json::from_str(body).map_err(|e| RouteError::ParseError(e.to_string()))
    }

    async fn request_route(
        &self,
        options: RouteOptions,
        start: &str,
        end: &str,
    ) -> Result<RouteResponse, RouteError> {
        if start.trim().is_empty() {
            return Err(RouteError::InvalidLocation(
                "Start location must not be empty".to_string(),
            ));
        }
        if end.trim().is_empty() {
            return Err(RouteError::InvalidLocation(
                "End location must not be empty".to_string(),
            ));
        }

        let url = self.build_request_url(&options, start, end);
        debug!(mode = %options.mode(), "Requesting route");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RouteError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                RouteError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies pass through raw; they are not reliably JSON.
            let body = response
                .text()
                .await
                .map_err(|e| RouteError::ConnectionFailed(e.to_string()))?;
            return Err(RouteError::Http {
                status_code: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RouteError::ParseError(e.to_string()))?;

        let result = Self::parse_route_response(&body)?;

        if result.resource_sets.iter().all(|set| set.resources.is_empty()) {
            warn!(mode = %options.mode(), "No routes in response");
        }

        debug!(
            routes = result.routes().count(),
            "Route request completed"
        );
        Ok(result)
    }
}

#[async_trait]
impl RouteClient for BingRouteClient {
    #[instrument(skip(self))]
    async fn get_transit_route(
        &self,
        start_location: &str,
        end_location: &str,
    ) -> Result<RouteResponse, RouteError> {
        let options = RouteOptions::transit(Utc::now(), self.config.max_transit_solutions);
        self.request_route(options, start_location, end_location)
            .await
    }

    #[instrument(skip(self))]
    async fn get_walking_route(
        &self,
        start_location: &str,
        end_location: &str,
    ) -> Result<RouteResponse, RouteError> {
        self.request_route(RouteOptions::walking(), start_location, end_location)
            .await
    }

    #[instrument(skip(self))]
    async fn get_driving_route(
        &self,
        start_location: &str,
        end_location: &str,
    ) -> Result<RouteResponse, RouteError> {
        self.request_route(RouteOptions::driving(), start_location, end_location)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn test_client() -> BingRouteClient {
        BingRouteClient::new(&RoutesConfig::for_testing()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RoutesConfig {
            timeout_secs: 0,
            ..RoutesConfig::default()
        };
        let result = BingRouteClient::new(&config);
        assert!(matches!(result, Err(RouteError::ConfigurationError(_))));
    }

    #[test]
    fn test_url_paths_per_mode() {
        let client = test_client();
        let departure = chrono::Utc.with_ymd_and_hms(2026, 6, 20, 14, 5, 0).unwrap();

        let cases = [
            (RouteOptions::transit(departure, 3), "Routes/Transit"),
            (RouteOptions::walking(), "Routes/Walking"),
            (RouteOptions::driving(), "Routes/Driving"),
        ];

        for (options, path) in cases {
            let url = client.build_request_url(&options, "a", "b");
            let without_query = url.split('?').next().unwrap();
            assert!(
                without_query.ends_with(path),
                "{without_query} should end with {path}"
            );
        }
    }

    #[test]
    fn test_url_encodes_waypoints_and_key() {
        let client = test_client();
        let url = client.build_request_url(
            &RouteOptions::walking(),
            "100 N Broad St, Philadelphia",
            "425 E Erie Ave, Philadelphia",
        );

        assert!(url.starts_with("http://dev.virtualearth.net/REST/v1/Routes/Walking?"));
        assert!(url.contains("wp.0=100%20N%20Broad%20St%2C%20Philadelphia"));
        assert!(url.contains("wp.1=425%20E%20Erie%20Ave%2C%20Philadelphia"));
        assert!(url.contains("key=test-key"));
        assert!(url.contains("optmz=distance"));
        assert!(url.contains("du=mi"));
        assert!(url.contains("o=json"));
    }

    #[test]
    fn test_transit_url_carries_time_params() {
        let client = test_client();
        let departure = chrono::Utc.with_ymd_and_hms(2026, 6, 20, 14, 5, 0).unwrap();
        let url = client.build_request_url(&RouteOptions::transit(departure, 3), "a", "b");

        assert!(url.contains("dt=6%2F20%2F2026%2014%3A05%3A00"));
        assert!(url.contains("tt=Departure"));
        assert!(url.contains("maxSolutions=3"));
    }

    #[test]
    fn test_walking_url_omits_time_params() {
        let client = test_client();
        let url = client.build_request_url(&RouteOptions::walking(), "a", "b");
        assert!(!url.contains("dt="));
        assert!(!url.contains("tt="));
        assert!(!url.contains("maxSolutions="));
    }

    #[test]
    fn test_parse_route_response_invalid_json() {
        let result = BingRouteClient::parse_route_response("not json");
        assert!(matches!(result, Err(RouteError::ParseError(_))));
    }

    #[test]
    fn test_parse_route_response_minimal() {
        let response = BingRouteClient::parse_route_response(r#"{"resourceSets":[]}"#).unwrap();
        assert!(response.resource_sets.is_empty());
    }

    #[tokio::test]
    async fn test_empty_locations_rejected() {
        let client = test_client();

        let result = client.get_walking_route("", "somewhere").await;
        assert!(matches!(result, Err(RouteError::InvalidLocation(_))));

        let result = client.get_driving_route("somewhere", "   ").await;
        assert!(matches!(result, Err(RouteError::InvalidLocation(_))));
    }
}
