//! # reachmap-view
//!
//! Lifecycle management for a single interactive map with a reachability
//! overlay.
//!
//! The rendering engine itself is an external collaborator behind the
//! [`engine::MapEngine`] trait. This crate owns everything around it: when
//! the one map instance is created and destroyed, how the isochrone overlay
//! is installed and kept consistent with asynchronous fetch results, and how
//! settled camera movements are reported back to the host as fixed-precision
//! strings.
//!
//! The only genuine concurrency hazard is an isochrone fetch resolving after
//! the instance that requested it is gone; see [`viewer::MapViewer`] for how
//! resolutions are gated on an instance generation.

pub mod camera;
pub mod config;
pub mod engine;
pub mod overlay;
pub mod viewer;

pub use camera::MoveCallback;
pub use config::{ContainerStyle, MapConfig};
pub use engine::{CameraSnapshot, FillLayerSpec, MapEngine, MapInstance, MapParams, MarkerSpec};
pub use viewer::{IsochroneOutcome, MapViewer, PendingIsochrone};

// Hosts configuring the fetch side get the client types from here too.
pub use reachmap_isochrone::{AccessToken, IsochroneClient, IsochroneError, IsochroneQuery};
