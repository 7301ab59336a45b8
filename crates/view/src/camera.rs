//! Fixed-precision camera reporting.
//!
//! The host contract is strings, not floats: coordinates carry exactly 5
//! decimal places and zoom exactly 1, trailing zeros included.

use crate::engine::CameraSnapshot;

/// Callback invoked after every settled camera movement with `[lng, lat]`
/// and zoom.
pub type MoveCallback = Box<dyn FnMut([String; 2], String)>;

pub(crate) fn format_center(snapshot: &CameraSnapshot) -> [String; 2] {
    [
        format!("{:.5}", snapshot.center.x()),
        format!("{:.5}", snapshot.center.y()),
    ]
}

pub(crate) fn format_zoom(snapshot: &CameraSnapshot) -> String {
    format!("{:.1}", snapshot.zoom)
}
