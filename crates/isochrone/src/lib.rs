//! # reachmap-isochrone
//!
//! Client for a travel-time reachability ("isochrone") service.
//!
//! Given a coordinate, a travel profile and a contour duration, the service
//! answers with a GeoJSON `FeatureCollection` of polygon features describing
//! the area reachable within that duration. This crate owns the single HTTP
//! round trip and the error taxonomy for it; it does not cache results and
//! does not retry.
//!
//! ## Example
//!
//! ```no_run
//! use reachmap_isochrone::{AccessToken, IsochroneClient, IsochroneQuery};
//! use geo::Point;
//!
//! # async fn run() -> Result<(), reachmap_isochrone::IsochroneError> {
//! let client = IsochroneClient::new();
//! let token = AccessToken::new("pk.example");
//!
//! // 15 minutes on foot around lower Manhattan.
//! let query = IsochroneQuery::new(Point::new(-73.99, 40.73));
//! let reachable = client.fetch(&query, &token).await?;
//! println!("{} polygon(s)", reachable.features.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod query;

pub use client::{IsochroneClient, IsochroneError};
pub use credentials::AccessToken;
pub use query::{DEFAULT_CONTOUR_MINUTES, IsochroneQuery, TravelProfile};
