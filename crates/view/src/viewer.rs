//! Map lifecycle and overlay synchronization.
//!
//! `MapViewer` keeps exactly one live map instance consistent with the
//! current `MapConfig`. Instances move through `Unmounted -> Mounting ->
//! Ready -> Unmounted`; the ready transition installs the overlay and the
//! marker and, when requested, starts the isochrone fetch.
//!
//! The fetch can outlive the instance that started it. Each mount bumps a
//! generation counter, each `PendingIsochrone` captures the generation at
//! request time, and `resolve_isochrone` only writes to the overlay when the
//! captured generation is still the live one. A result arriving after
//! `unmount` or `reconfigure` is dropped without touching engine state.

use geojson::FeatureCollection;
use reachmap_isochrone::{
    AccessToken, IsochroneClient, IsochroneError, IsochroneQuery,
};
use tracing::{debug, info, warn};

use crate::camera::{self, MoveCallback};
use crate::config::MapConfig;
use crate::engine::{MapEngine, MapInstance, MapParams, MarkerSpec};
use crate::overlay;

const MARKER_COLOR: &str = "#314ccd";

/// A fetch the viewer wants performed, tagged with the generation of the
/// instance that requested it.
#[derive(Clone, Debug)]
pub struct PendingIsochrone {
    generation: u64,
    pub query: IsochroneQuery,
    pub token: AccessToken,
}

/// What became of a resolved fetch.
#[derive(Debug)]
pub enum IsochroneOutcome {
    /// Written to the live overlay source.
    Applied,
    /// The owning instance was destroyed or replaced; result dropped.
    Stale,
    /// The fetch itself failed; overlay left empty, no retry.
    Failed(IsochroneError),
}

enum Lifecycle<I> {
    Unmounted,
    Mounting { instance: I, config: MapConfig },
    Ready { instance: I, config: MapConfig },
}

pub struct MapViewer<E: MapEngine> {
    engine: E,
    isochrone: IsochroneClient,
    state: Lifecycle<E::Instance>,
    generation: u64,
    on_move: Option<MoveCallback>,
}

impl<E: MapEngine> MapViewer<E> {
    pub fn new(engine: E) -> Self {
        Self::with_isochrone_client(engine, IsochroneClient::new())
    }

    pub fn with_isochrone_client(engine: E, isochrone: IsochroneClient) -> Self {
        Self {
            engine,
            isochrone,
            state: Lifecycle::Unmounted,
            generation: 0,
            on_move: None,
        }
    }

    /// Register the callback invoked after every settled camera movement.
    ///
    /// The callback only ever fires from [`handle_move_end`], never from
    /// `mount` or `reconfigure`.
    ///
    /// [`handle_move_end`]: Self::handle_move_end
    pub fn set_move_callback(&mut self, callback: MoveCallback) {
        self.on_move = Some(callback);
    }

    /// Config of the current instance, if one is mounted.
    pub fn config(&self) -> Option<&MapConfig> {
        match &self.state {
            Lifecycle::Unmounted => None,
            Lifecycle::Mounting { config, .. } | Lifecycle::Ready { config, .. } => Some(config),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, Lifecycle::Ready { .. })
    }

    /// Create the map instance for `config`.
    ///
    /// Any live instance is destroyed first; two instances never coexist.
    pub fn mount(&mut self, config: MapConfig) {
        self.unmount();
        self.generation += 1;
        info!(generation = self.generation, zoom = config.zoom, "creating map instance");

        let instance = self.engine.create_map(&MapParams::from(&config));
        self.state = Lifecycle::Mounting { instance, config };
    }

    /// Apply a configuration change.
    ///
    /// A value-equal config is a no-op. Anything else destroys the current
    /// instance and mounts a fresh one; partial reuse is not allowed, since
    /// overlay and marker state must never survive a config change.
    pub fn reconfigure(&mut self, config: MapConfig) {
        match self.config() {
            Some(current) if *current == config => {
                debug!("configuration unchanged, keeping current map instance");
            }
            _ => self.mount(config),
        }
    }

    /// Destroy the instance and everything bound to it.
    ///
    /// Safe in every state, including before the ready event ever fired.
    pub fn unmount(&mut self) {
        match std::mem::replace(&mut self.state, Lifecycle::Unmounted) {
            Lifecycle::Unmounted => {}
            Lifecycle::Mounting { instance, .. } | Lifecycle::Ready { instance, .. } => {
                debug!(generation = self.generation, "destroying map instance");
                instance.destroy();
            }
        }
    }

    /// Engine "ready" event, fired once per instance.
    ///
    /// Installs the empty overlay source, the fill layer and the marker,
    /// then transitions to `Ready`. When the config asks for the isochrone,
    /// returns the fetch to perform; the caller runs it and feeds the result
    /// to [`resolve_isochrone`]. Ignored unless a mount is in progress.
    ///
    /// [`resolve_isochrone`]: Self::resolve_isochrone
    pub fn handle_ready(&mut self) -> Option<PendingIsochrone> {
        let state = std::mem::replace(&mut self.state, Lifecycle::Unmounted);
        let (mut instance, config) = match state {
            Lifecycle::Mounting { instance, config } => (instance, config),
            other => {
                debug!("ready event outside of mounting, ignoring");
                self.state = other;
                return None;
            }
        };

        overlay::install(&mut instance);
        instance.place_marker(MarkerSpec {
            position: config.center,
            color: MARKER_COLOR.to_string(),
        });

        let pending = config.show_isochrone.then(|| PendingIsochrone {
            generation: self.generation,
            query: IsochroneQuery::new(config.center),
            token: config.access_token.clone(),
        });

        self.state = Lifecycle::Ready { instance, config };
        pending
    }

    /// Full ready path: install, fetch, resolve, in one call.
    ///
    /// Holds the viewer for the duration of the fetch, so nothing can
    /// interleave with it. Hosts that need to `reconfigure` while a fetch is
    /// in flight schedule the fetch themselves via [`handle_ready`] and
    /// [`resolve_isochrone`].
    ///
    /// [`handle_ready`]: Self::handle_ready
    /// [`resolve_isochrone`]: Self::resolve_isochrone
    pub async fn run_ready(&mut self) -> Option<IsochroneOutcome> {
        let pending = self.handle_ready()?;
        let outcome = self.isochrone.fetch(&pending.query, &pending.token).await;
        Some(self.resolve_isochrone(&pending, outcome))
    }

    /// Apply the outcome of a fetch started by [`handle_ready`].
    ///
    /// The result is written to the overlay source only when the instance
    /// that requested it is still the live one. Everything else — resolved
    /// after `unmount`, after a `reconfigure`, or with a fetch error — leaves
    /// engine state untouched and never panics.
    ///
    /// [`handle_ready`]: Self::handle_ready
    pub fn resolve_isochrone(
        &mut self,
        pending: &PendingIsochrone,
        outcome: Result<FeatureCollection, IsochroneError>,
    ) -> IsochroneOutcome {
        let live = match &mut self.state {
            Lifecycle::Ready { instance, .. } if pending.generation == self.generation => {
                Some(instance)
            }
            _ => None,
        };

        let Some(instance) = live else {
            debug!(
                requested = pending.generation,
                current = self.generation,
                "discarding stale isochrone result"
            );
            return IsochroneOutcome::Stale;
        };

        match outcome {
            Ok(collection) => {
                debug!(features = collection.features.len(), "applying isochrone to overlay");
                instance.set_source_data(overlay::OVERLAY_SOURCE, collection);
                IsochroneOutcome::Applied
            }
            Err(error) => {
                warn!(%error, "isochrone fetch failed, overlay left empty");
                IsochroneOutcome::Failed(error)
            }
        }
    }

    /// Engine "movement-settled" event, fired on every settle.
    ///
    /// Reads the camera, formats it to the fixed-precision contract and
    /// invokes the host callback exactly once. Ignored before ready.
    pub fn handle_move_end(&mut self) {
        let Lifecycle::Ready { instance, .. } = &self.state else {
            debug!("settle event outside of ready state, ignoring");
            return;
        };

        let snapshot = instance.camera();
        if let Some(on_move) = self.on_move.as_mut() {
            on_move(camera::format_center(&snapshot), camera::format_zoom(&snapshot));
        }
    }
}
