//! HTTP client for the reachability service.

use geojson::FeatureCollection;
use tracing::debug;

use crate::credentials::AccessToken;
use crate::query::IsochroneQuery;

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/isochrone/v1/mapbox";

#[derive(Debug, thiserror::Error)]
pub enum IsochroneError {
    /// The service answered with a non-success status.
    #[error("isochrone request failed: {status}")]
    Fetch { status: reqwest::StatusCode },

    /// The response body was not well-formed GeoJSON.
    #[error("malformed isochrone response: {0}")]
    Parse(#[from] geojson::Error),

    /// The request never completed (DNS, connection, transfer).
    #[error("isochrone request could not be sent: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for one reachability endpoint.
///
/// Cheap to clone; the inner `reqwest::Client` pools connections. One call
/// per query, no caching, no retry.
#[derive(Clone, Debug)]
pub struct IsochroneClient {
    http: reqwest::Client,
    base_url: String,
}

impl IsochroneClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint, e.g. a local stub.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the reachability polygon(s) for `query`.
    ///
    /// Returns the parsed `FeatureCollection` on success. Any failure along
    /// the path (transport, status, parse) is reported as a single
    /// `IsochroneError`; the caller decides what to do with it.
    pub async fn fetch(
        &self,
        query: &IsochroneQuery,
        token: &AccessToken,
    ) -> Result<FeatureCollection, IsochroneError> {
        let url = format!(
            "{}/{}/{},{}",
            self.base_url,
            query.profile.as_path_segment(),
            query.center.x(),
            query.center.y(),
        );
        debug!(%url, minutes = query.contour_minutes, "requesting isochrone");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("contours_minutes", query.contour_minutes.to_string()),
                ("polygons", "true".to_string()),
                ("access_token", token.as_str().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IsochroneError::Fetch { status });
        }

        let body = response.text().await?;
        let geojson = body.parse::<geojson::GeoJson>()?;
        let collection = FeatureCollection::try_from(geojson)?;

        Ok(collection)
    }
}

impl Default for IsochroneClient {
    fn default() -> Self {
        Self::new()
    }
}
