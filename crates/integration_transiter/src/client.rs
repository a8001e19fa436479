//! Transiter REST client
//!
//! One `GET` per operation against the configured base URL. Success bodies
//! decode into [`domain`] entities; every failure is classified into an
//! [`ApiError`].

use std::time::Duration;

use async_trait::async_trait;
use domain::{
    Agency, ListAgenciesReply, ListRoutesReply, ListStopsReply, ListSystemsReply, Route, Stop,
    System,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, LOCATION};
use reqwest::{Client, redirect};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::classify::{Fault, classify};
use crate::config::{ConfigError, TransiterConfig};
use crate::error::{ApiError, RequestError};
use crate::request::{GetStopRequest, ListStopsRequest, QueryPairs, RouteRequest};

/// Trait for Transiter API clients
#[async_trait]
pub trait TransitApi: Send + Sync {
    /// `GET /systems`
    async fn get_systems(&self) -> Result<ListSystemsReply, ApiError>;

    /// `GET /systems/{system_id}`
    async fn get_system(&self, system_id: &str) -> Result<System, ApiError>;

    /// `GET /systems/{system_id}/agencies`
    async fn get_agencies(&self, system_id: &str) -> Result<ListAgenciesReply, ApiError>;

    /// `GET /systems/{system_id}/agencies/{agency_id}`
    async fn get_agency(&self, system_id: &str, agency_id: &str) -> Result<Agency, ApiError>;

    /// `GET /systems/{system_id}/stops`
    async fn get_stops(
        &self,
        system_id: &str,
        request: &ListStopsRequest,
    ) -> Result<ListStopsReply, ApiError>;

    /// `GET /systems/{system_id}/stops/{stop_id}`
    async fn get_stop(
        &self,
        system_id: &str,
        stop_id: &str,
        request: &GetStopRequest,
    ) -> Result<Stop, ApiError>;

    /// `GET /systems/{system_id}/routes`
    async fn get_routes(
        &self,
        system_id: &str,
        request: &RouteRequest,
    ) -> Result<ListRoutesReply, ApiError>;

    /// `GET /systems/{system_id}/routes/{route_id}`
    async fn get_route(
        &self,
        system_id: &str,
        route_id: &str,
        request: &RouteRequest,
    ) -> Result<Route, ApiError>;

    /// Check if the Transiter instance is reachable
    async fn is_healthy(&self) -> bool;
}

/// [`TransitApi`] over `reqwest`
///
/// Holds no per-request state; clones share the connection pool and may be
/// used concurrently.
#[derive(Debug, Clone)]
pub struct TransiterClient {
    client: Client,
    base_url: Url,
    log_headers: bool,
}

impl TransiterClient {
    /// Create a new Transiter client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TransiterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let redirects = if config.max_redirects == 0 {
            redirect::Policy::none()
        } else {
            redirect::Policy::limited(config.max_redirects)
        };

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .redirect(redirects);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            log_headers: config.log_headers,
        })
    }

    /// The base URL requests are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RequestError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RequestError::CannotBeBase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        self.endpoint(segments)
            .map_err(|e| classify(Fault::InvalidRequest(e)))
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, query: &QueryPairs) -> Result<T, ApiError> {
        self.execute(url, query).await.map_err(|fault| {
            let err = classify(fault);
            warn!(kind = %err.kind(), status = ?err.status_code(), error = %err, "Transiter request failed");
            err
        })
    }

    async fn execute<T: DeserializeOwned>(&self, url: Url, query: &QueryPairs) -> Result<T, Fault> {
        debug!(%url, ?query, "GET");

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let request = request.build().map_err(Fault::Transport)?;
        if self.log_headers {
            debug!(headers = ?request.headers(), "Request headers");
        }

        let response = self.client.execute(request).await.map_err(Fault::Transport)?;
        let status = response.status();
        if self.log_headers {
            debug!(%status, headers = ?response.headers(), "Response headers");
        }

        if !status.is_success() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            return Err(Fault::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string),
                body,
                location,
            });
        }

        let body = response.bytes().await.map_err(Fault::Transport)?;
        serde_json::from_slice(&body).map_err(Fault::Decode)
    }
}

/// Reject blank path parameters before any I/O
fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        let err = classify(Fault::InvalidRequest(RequestError::EmptySegment { name }));
        warn!(error = %err, "Rejected request");
        return Err(err);
    }
    Ok(value)
}

#[async_trait]
impl TransitApi for TransiterClient {
    #[instrument(skip(self))]
    async fn get_systems(&self) -> Result<ListSystemsReply, ApiError> {
        let url = self.url(&["systems"])?;
        let reply: ListSystemsReply = self.fetch(url, &QueryPairs::new()).await?;
        debug!(count = reply.systems.len(), "Systems fetched");
        Ok(reply)
    }

    #[instrument(skip(self))]
    async fn get_system(&self, system_id: &str) -> Result<System, ApiError> {
        let system_id = required("system_id", system_id)?;
        let url = self.url(&["systems", system_id])?;
        let system: System = self.fetch(url, &QueryPairs::new()).await?;
        debug!(status = %system.status, "System fetched");
        Ok(system)
    }

    #[instrument(skip(self))]
    async fn get_agencies(&self, system_id: &str) -> Result<ListAgenciesReply, ApiError> {
        let system_id = required("system_id", system_id)?;
        let url = self.url(&["systems", system_id, "agencies"])?;
        let reply: ListAgenciesReply = self.fetch(url, &QueryPairs::new()).await?;
        debug!(count = reply.agencies.len(), "Agencies fetched");
        Ok(reply)
    }

    #[instrument(skip(self))]
    async fn get_agency(&self, system_id: &str, agency_id: &str) -> Result<Agency, ApiError> {
        let system_id = required("system_id", system_id)?;
        let agency_id = required("agency_id", agency_id)?;
        let url = self.url(&["systems", system_id, "agencies", agency_id])?;
        self.fetch(url, &QueryPairs::new()).await
    }

    #[instrument(skip(self, request))]
    async fn get_stops(
        &self,
        system_id: &str,
        request: &ListStopsRequest,
    ) -> Result<ListStopsReply, ApiError> {
        let system_id = required("system_id", system_id)?;
        let url = self.url(&["systems", system_id, "stops"])?;
        let reply: ListStopsReply = self.fetch(url, &request.query_pairs()).await?;
        debug!(count = reply.stops.len(), next_id = ?reply.next_id, "Stops fetched");
        Ok(reply)
    }

    #[instrument(skip(self, request))]
    async fn get_stop(
        &self,
        system_id: &str,
        stop_id: &str,
        request: &GetStopRequest,
    ) -> Result<Stop, ApiError> {
        let system_id = required("system_id", system_id)?;
        let stop_id = required("stop_id", stop_id)?;
        let url = self.url(&["systems", system_id, "stops", stop_id])?;
        let stop: Stop = self.fetch(url, &request.query_pairs()).await?;
        debug!(stop_times = stop.stop_times.len(), "Stop fetched");
        Ok(stop)
    }

    #[instrument(skip(self, request))]
    async fn get_routes(
        &self,
        system_id: &str,
        request: &RouteRequest,
    ) -> Result<ListRoutesReply, ApiError> {
        let system_id = required("system_id", system_id)?;
        let url = self.url(&["systems", system_id, "routes"])?;
        let reply: ListRoutesReply = self.fetch(url, &request.query_pairs()).await?;
        debug!(count = reply.routes.len(), "Routes fetched");
        Ok(reply)
    }

    #[instrument(skip(self, request))]
    async fn get_route(
        &self,
        system_id: &str,
        route_id: &str,
        request: &RouteRequest,
    ) -> Result<Route, ApiError> {
        let system_id = required("system_id", system_id)?;
        let route_id = required("route_id", route_id)?;
        let url = self.url(&["systems", system_id, "routes", route_id])?;
        self.fetch(url, &request.query_pairs()).await
    }

    async fn is_healthy(&self) -> bool {
        let Ok(url) = self.endpoint(&["systems"]) else {
            return false;
        };
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Health check failed");
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;

    fn client_for(base_url: &str) -> TransiterClient {
        TransiterClient::new(&TransiterConfig {
            base_url: base_url.to_string(),
            ..TransiterConfig::for_testing()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_appends_to_root() {
        let client = client_for("https://demo.transiter.dev");
        let url = client.endpoint(&["systems", "us-ny-nycsubway", "routes", "A"]).unwrap();
        assert_eq!(url.as_str(), "https://demo.transiter.dev/systems/us-ny-nycsubway/routes/A");
    }

    #[test]
    fn endpoint_keeps_base_path_and_trailing_slash() {
        for base in ["http://localhost:8080/transiter", "http://localhost:8080/transiter/"] {
            let url = client_for(base).endpoint(&["systems"]).unwrap();
            assert_eq!(url.path(), "/transiter/systems");
        }
    }

    #[test]
    fn endpoint_percent_encodes_segments() {
        let client = client_for("https://demo.transiter.dev");
        let url = client.endpoint(&["systems", "a b/c", "stops", "A?1"]).unwrap();
        assert_eq!(url.path(), "/systems/a%20b%2Fc/stops/A%3F1");
    }

    #[test]
    fn blank_segment_is_rejected() {
        let err = required("stop_id", "  ").unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Unknown);
        assert!(err.to_string().contains("stop_id"));
        assert_eq!(required("stop_id", "A02").unwrap(), "A02");
    }

    #[test]
    fn invalid_config_fails_construction() {
        let config = TransiterConfig {
            base_url: "not a url".to_string(),
            ..TransiterConfig::default()
        };
        assert!(matches!(TransiterClient::new(&config), Err(ConfigError::Invalid(_))));
    }
}
