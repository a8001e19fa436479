//! Transiter integration for trainsnow
//!
//! A thin typed client for the read-only REST API of a
//! [Transiter](https://docs.transiter.dev) instance: transit systems, their
//! agencies, stops and routes.
//!
//! # Architecture
//!
//! [`TransitApi`] declares one method per endpoint and is implemented by
//! [`TransiterClient`]. Every method issues exactly one `GET`, decodes the
//! JSON body into the [`domain`] entities and returns either the value or a
//! classified [`ApiError`]. Raw transport errors never escape: they pass
//! through [`classify`] first.
//!
//! Dropping a returned future cancels the request. Cancellation is not an
//! error kind, so callers observe it through whatever mechanism dropped the
//! future (`tokio::time::timeout`, `select!`, task abort).
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transiter::{RouteRequest, TransitApi, TransiterClient, TransiterConfig};
//!
//! let client = TransiterClient::new(&TransiterConfig::default())?;
//! let route = client
//!     .get_route("us-ny-nycsubway", "A", &RouteRequest::default().skip_alerts(true))
//!     .await?;
//! println!("{}", route.display_name());
//! ```

mod classify;
mod client;
mod config;
mod error;
mod request;

pub use classify::{Fault, classify};
pub use client::{TransitApi, TransiterClient};
pub use config::{ConfigError, TransiterConfig};
pub use error::{ApiError, ApiErrorKind, BoxError, RequestError, TimeoutKind};
pub use request::{DEFAULT_STOP_LIMIT, GetStopRequest, ListStopsRequest, QueryPairs, RouteRequest};
