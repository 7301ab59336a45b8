//! The reachability overlay: one source, one fill layer.

use geojson::FeatureCollection;

use crate::engine::{FillLayerSpec, MapInstance};

pub const OVERLAY_SOURCE: &str = "iso";
pub const OVERLAY_LAYER: &str = "isoLayer";

/// Anchor the fill is inserted below so it renders under labels.
pub const LABEL_ANCHOR_LAYER: &str = "poi-label";

const FILL_COLOR: &str = "#5a3fc0";
const FILL_OPACITY: f64 = 0.3;

pub(crate) fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}

/// Install the empty overlay source and its fill layer on a fresh instance.
/// Called once per instance, from the ready handler; the layer is never
/// mutated afterward, only the source data is.
pub(crate) fn install<I: MapInstance>(instance: &mut I) {
    instance.add_geojson_source(OVERLAY_SOURCE, empty_collection());
    instance.add_fill_layer(
        FillLayerSpec {
            id: OVERLAY_LAYER.to_string(),
            source: OVERLAY_SOURCE.to_string(),
            color: FILL_COLOR.to_string(),
            opacity: FILL_OPACITY,
        },
        LABEL_ANCHOR_LAYER,
    );
}
