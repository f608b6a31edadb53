//! # Wildfire imagery viewer controller
//!
//! `firemap` ties the imagery crates together behind a single
//! [`Viewer`]: a per-date layer registry, the two-pane comparison
//! from [`splitview`], the affected-area overlay, and all-or-nothing
//! elevation profiles from [`elevprof`]. Rendering stays with the map
//! and chart layers; this crate only produces the data they consume.

mod error;
mod layers;
mod viewer;
mod zones;

pub use crate::{
    error::FiremapError,
    layers::{LayerConfig, LayerSet, MAX_ZOOM, MIN_ZOOM},
    viewer::{LayerToggle, Viewer},
    zones::{AffectedZones, Zone, ZoneStyle},
};
pub use {elevprof, rastile, splitview};
