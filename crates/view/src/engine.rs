//! Seam to the map rendering engine.
//!
//! Tiles, projection and input handling belong to the engine; this crate
//! only needs the handful of operations below. Implementations bind a real
//! engine (for example a mapbox-gl bridge); tests use a recording mock.

use std::sync::Arc;

use geo::Point;
use geojson::FeatureCollection;
use reachmap_isochrone::AccessToken;

use crate::config::{ContainerStyle, MapConfig};

/// Everything the engine needs to bring up one map instance.
#[derive(Clone, Debug)]
pub struct MapParams {
    pub style_url: Arc<str>,
    pub center: Point,
    pub zoom: f64,
    pub access_token: AccessToken,
    pub container_style: ContainerStyle,
}

impl From<&MapConfig> for MapParams {
    fn from(config: &MapConfig) -> Self {
        Self {
            style_url: config.style_url.clone(),
            center: config.center,
            zoom: config.zoom,
            access_token: config.access_token.clone(),
            container_style: config.container_style.clone(),
        }
    }
}

/// A polygon fill layer bound to a named source.
#[derive(Clone, Debug, PartialEq)]
pub struct FillLayerSpec {
    pub id: String,
    pub source: String,
    pub color: String,
    pub opacity: f64,
}

/// The single point marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub position: Point,
    pub color: String,
}

/// Camera position as read from the engine on a settle event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSnapshot {
    pub center: Point,
    pub zoom: f64,
}

/// One live map. Owned exclusively by the viewer; destroyed before any
/// replacement is created.
pub trait MapInstance {
    /// Add a named GeoJSON source holding `data`.
    fn add_geojson_source(&mut self, id: &str, data: FeatureCollection);

    /// Replace the data of an existing named source in place.
    fn set_source_data(&mut self, id: &str, data: FeatureCollection);

    /// Add a fill layer, inserted below the `below` anchor layer so it
    /// renders under labels.
    fn add_fill_layer(&mut self, layer: FillLayerSpec, below: &str);

    /// Place the marker.
    fn place_marker(&mut self, marker: MarkerSpec);

    /// Read the current camera position.
    fn camera(&self) -> CameraSnapshot;

    /// Tear the instance down, releasing engine resources.
    fn destroy(self);
}

pub trait MapEngine {
    type Instance: MapInstance;

    fn create_map(&mut self, params: &MapParams) -> Self::Instance;
}
