//! Host-facing configuration.
//!
//! A `MapConfig` is immutable for the lifetime of one map instance; handing
//! the viewer a config that compares unequal to the current one tears the
//! instance down and builds a fresh one.

use std::sync::Arc;

use geo::Point;
use reachmap_isochrone::AccessToken;

/// Styling applied to the element the map is rendered into.
///
/// Defaults fill the parent element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerStyle {
    pub position: Arc<str>,
    pub width: Arc<str>,
    pub height: Arc<str>,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            position: "relative".into(),
            width: "100%".into(),
            height: "100%".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub center: Point,
    pub zoom: f64,
    pub show_isochrone: bool,
    pub access_token: AccessToken,
    pub style_url: Arc<str>,
    pub container_style: ContainerStyle,
}

impl MapConfig {
    pub fn new(
        center: Point,
        zoom: f64,
        style_url: impl AsRef<str>,
        access_token: AccessToken,
    ) -> Self {
        Self {
            center,
            zoom,
            show_isochrone: false,
            access_token,
            style_url: style_url.as_ref().into(),
            container_style: ContainerStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_value_comparison() {
        let token = AccessToken::new("pk.test");
        let a = MapConfig::new(Point::new(-73.99, 40.73), 12.0, "mapbox://styles/x", token.clone());
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = a.clone();
        c.zoom = 13.0;
        assert_ne!(a, c);

        let mut d = a.clone();
        d.show_isochrone = true;
        assert_ne!(a, d);
    }

    #[test]
    fn test_container_style_fills_parent_by_default() {
        let style = ContainerStyle::default();
        assert_eq!(&*style.position, "relative");
        assert_eq!(&*style.width, "100%");
        assert_eq!(&*style.height, "100%");
    }
}
