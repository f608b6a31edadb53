//! Per-date imagery layer registry.

use crate::FiremapError;
use rastile::UrlTemplate;
use serde::Deserialize;

/// Zoom range the imagery mosaics were published for.
pub const MIN_ZOOM: u8 = 8;
pub const MAX_ZOOM: u8 = 16;

/// One imagery layer: the mosaic for a single acquisition date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerConfig {
    /// Acquisition date label, also the layer's id.
    pub date: String,

    pub template: UrlTemplate,
    pub min_zoom: u8,
    pub max_zoom: u8,

    /// Elevation source sampled when this layer takes part in a
    /// profile.
    pub source_file: String,
}

impl LayerConfig {
    pub fn new(
        date: impl Into<String>,
        template: UrlTemplate,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            template,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            source_file: source_file.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLayer {
    date: String,
    template: String,
    source_file: String,
    #[serde(default = "min_zoom_default")]
    min_zoom: u8,
    #[serde(default = "max_zoom_default")]
    max_zoom: u8,
}

fn min_zoom_default() -> u8 {
    MIN_ZOOM
}

fn max_zoom_default() -> u8 {
    MAX_ZOOM
}

/// Insertion-ordered layer registry with per-layer visibility.
///
/// Layers start hidden, the way an unchecked layer list renders.
#[derive(Debug, Clone, Default)]
pub struct LayerSet {
    layers: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    config: LayerConfig,
    visible: bool,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a registry from its JSON description, an array of
    /// `{"date", "template", "sourceFile", "minZoom"?, "maxZoom"?}`
    /// objects.
    pub fn from_json(json: &str) -> Result<Self, FiremapError> {
        let wire: Vec<WireLayer> = serde_json::from_str(json)?;
        let mut layers = Self::new();
        for layer in wire {
            let template = UrlTemplate::new(layer.template)?;
            layers.insert(LayerConfig {
                date: layer.date,
                template,
                min_zoom: layer.min_zoom,
                max_zoom: layer.max_zoom,
                source_file: layer.source_file,
            })?;
        }
        Ok(layers)
    }

    /// Registers a layer. Dates are unique.
    pub fn insert(&mut self, config: LayerConfig) -> Result<(), FiremapError> {
        if self.get(&config.date).is_ok() {
            return Err(FiremapError::DuplicateLayer(config.date));
        }
        self.layers.push(Entry {
            config,
            visible: false,
        });
        Ok(())
    }

    pub fn get(&self, date: &str) -> Result<&LayerConfig, FiremapError> {
        self.layers
            .iter()
            .find(|entry| entry.config.date == date)
            .map(|entry| &entry.config)
            .ok_or_else(|| FiremapError::UnknownLayer(date.to_string()))
    }

    pub fn is_visible(&self, date: &str) -> Result<bool, FiremapError> {
        self.entry(date).map(|entry| entry.visible)
    }

    /// Flips a layer's visibility and returns the new value.
    pub fn toggle(&mut self, date: &str) -> Result<bool, FiremapError> {
        let entry = self.entry_mut(date)?;
        entry.visible = !entry.visible;
        Ok(entry.visible)
    }

    pub fn set_visible(&mut self, date: &str, visible: bool) -> Result<(), FiremapError> {
        self.entry_mut(date)?.visible = visible;
        Ok(())
    }

    /// Every registered layer, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LayerConfig> {
        self.layers.iter().map(|entry| &entry.config)
    }

    /// The visible layers, in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &LayerConfig> {
        self.layers
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| &entry.config)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Private API.
impl LayerSet {
    fn entry(&self, date: &str) -> Result<&Entry, FiremapError> {
        self.layers
            .iter()
            .find(|entry| entry.config.date == date)
            .ok_or_else(|| FiremapError::UnknownLayer(date.to_string()))
    }

    fn entry_mut(&mut self, date: &str) -> Result<&mut Entry, FiremapError> {
        self.layers
            .iter_mut()
            .find(|entry| entry.config.date == date)
            .ok_or_else(|| FiremapError::UnknownLayer(date.to_string()))
    }
}
