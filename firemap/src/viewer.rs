//! The viewer controller.
//!
//! One `Viewer` owns every piece of mutable state the front end works
//! with: the layer registry, the comparison selection, the current
//! viewport, and the loaded zones. Input handlers call its methods
//! instead of reaching for globals, so every mutation happens in one
//! place and in response to one event.

use crate::{AffectedZones, FiremapError, LayerSet};
use elevprof::{Client, ProfileSeries};
use geo::geometry::Coord;
use log::debug;
use rastile::TileCoord;
use splitview::{ClipSplit, Compare, Teardown, ViewBox, DEFAULT_FRACTION};

/// Outcome of a layer toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerToggle {
    /// The layer's new visibility.
    pub visible: bool,

    /// Set when hiding the layer ended a running comparison; the
    /// caller restores these panes' clips and ordering.
    pub stopped: Option<Teardown<String>>,
}

pub struct Viewer {
    layers: LayerSet,
    compare: Compare<String>,
    view: ViewBox,
    zones: Option<AffectedZones>,
}

impl Viewer {
    pub fn new(layers: LayerSet, view: ViewBox) -> Self {
        Self {
            layers,
            compare: Compare::new(),
            view,
            zones: None,
        }
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn zones(&self) -> Option<&AffectedZones> {
        self.zones.as_ref()
    }

    /// Parses and stores the affected-area overlay.
    pub fn load_zones(&mut self, json: &str) -> Result<&AffectedZones, FiremapError> {
        let zones = AffectedZones::from_json(json)?;
        Ok(self.zones.insert(zones))
    }

    /// Flips a layer's visibility.
    ///
    /// Hiding a layer that is part of the running comparison stops
    /// the comparison; hiding one that is merely selected drops it
    /// from the pending selection.
    pub fn toggle_layer(&mut self, date: &str) -> Result<LayerToggle, FiremapError> {
        let visible = self.layers.toggle(date)?;
        let mut stopped = None;
        if !visible {
            let compared = self
                .compare
                .panes()
                .map_or(false, |(left, right)| left == date || right == date);
            if compared {
                stopped = self.compare.stop();
            } else if self.compare.selection().iter().any(|id| id == date) {
                self.compare.select(date.to_string())?;
            }
        }
        Ok(LayerToggle { visible, stopped })
    }

    /// Resolves the tile URL covering `coord` on a layer.
    pub fn tile_url(
        &self,
        date: &str,
        coord: Coord<f64>,
        zoom: u8,
    ) -> Result<String, FiremapError> {
        let layer = self.layers.get(date)?;
        if !(layer.min_zoom..=layer.max_zoom).contains(&zoom) {
            return Err(FiremapError::ZoomRange {
                zoom,
                min: layer.min_zoom,
                max: layer.max_zoom,
            });
        }
        Ok(layer.template.url_for(TileCoord::from_lonlat(coord, zoom)))
    }

    /// Toggles a visible layer in the comparison selection and
    /// returns how many layers are now selected.
    pub fn compare_select(&mut self, date: &str) -> Result<usize, FiremapError> {
        let layer = self.layers.get(date)?;
        if !self.layers.is_visible(&layer.date)? {
            return Err(FiremapError::HiddenLayer {
                date: layer.date.clone(),
            });
        }
        Ok(self.compare.select(date.to_string())?)
    }

    /// Starts comparing the two selected layers and returns the
    /// initial centered clip state.
    pub fn compare_start(&mut self) -> Result<ClipSplit, FiremapError> {
        self.compare.start()?;
        Ok(splitview::split(&self.view, DEFAULT_FRACTION))
    }

    /// Stops any running comparison. The returned teardown names the
    /// panes whose visual state must be restored.
    pub fn compare_stop(&mut self) -> Option<Teardown<String>> {
        self.compare.stop()
    }

    /// Moves the divider and returns the recomputed clip state.
    pub fn set_divider(&mut self, fraction: f64) -> Result<ClipSplit, FiremapError> {
        Ok(self.compare.drag(fraction, &self.view)?)
    }

    /// Records a pan, zoom, or resize and, when a comparison is
    /// running, returns the clip state recomputed for the new view.
    pub fn view_changed(&mut self, view: ViewBox) -> Option<ClipSplit> {
        self.view = view;
        self.compare.split(&self.view)
    }

    /// Clip state for the current view, `None` unless comparing.
    pub fn clip(&self) -> Option<ClipSplit> {
        self.compare.split(&self.view)
    }

    pub fn is_comparing(&self) -> bool {
        self.compare.is_comparing()
    }

    /// Builds an elevation profile along `path`, one series per
    /// visible layer, all-or-nothing.
    ///
    /// With nothing visible there is nothing to sample, which is
    /// reported synchronously before any request goes out.
    pub fn profile(
        &self,
        client: &Client,
        path: &[Coord<f64>],
        num_samples: usize,
    ) -> Result<Vec<ProfileSeries>, FiremapError> {
        let sources: Vec<String> = self
            .layers
            .visible()
            .map(|layer| layer.source_file.clone())
            .collect();
        if sources.is_empty() {
            return Err(FiremapError::NoVisibleLayers);
        }
        debug!(
            "profiling {} sources along {} path points",
            sources.len(),
            path.len()
        );
        Ok(client.profiles(path, &sources, num_samples)?)
    }
}
