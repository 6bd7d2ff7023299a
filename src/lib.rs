//! Bing Maps Routes client
//!
//! Thin client for the [Bing Maps (Virtual Earth) REST Routes API](http://dev.virtualearth.net/REST/v1),
//! providing public transit, walking and driving directions between two
//! addresses.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`RouteClient`] defines the
//! three route operations, implemented by [`BingRouteClient`]. Each call
//! resolves mode defaults into a [`RouteOptions`] variant, percent-encodes
//! the query, issues one GET, and normalizes the outcome into a typed
//! [`RouteResponse`] or a [`RouteError`]. There is no caching, retrying or
//! shared mutable state; concurrent calls are independent.
//!
//! # Example
//!
//! ```rust,ignore
//! use bing_routes::{BingRouteClient, RouteClient, RoutesConfig};
//!
//! let config = RoutesConfig::from_env();
//! let client = BingRouteClient::new(&config)?;
//!
//! let response = client
//!     .get_transit_route("100 N Broad St, Philadelphia", "425 E Erie Ave, Philadelphia")
//!     .await?;
//!
//! if let Some(route) = response.first_route() {
//!     println!("{route}");
//! }
//! ```

mod client;
mod config;
mod error;
mod models;
mod options;
mod query;

pub use client::{BingRouteClient, RouteClient};
pub use config::{API_KEY_ENV, RoutesConfig};
pub use error::{EnvelopeBody, ErrorEnvelope, RouteError};
pub use models::{Instruction, ItineraryItem, Point, ResourceSet, Route, RouteLeg, RouteResponse};
pub use options::{DistanceUnit, Optimize, RouteOptions, TimeType, TravelMode};
