use elevprof::ElevProfError;
use rastile::RastileError;
use splitview::SplitViewError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FiremapError {
    #[error("no layer for date {0:?}")]
    UnknownLayer(String),

    #[error("a layer for date {0:?} is already registered")]
    DuplicateLayer(String),

    #[error("layer {date:?} is hidden")]
    HiddenLayer { date: String },

    #[error("zoom {zoom} is outside the layer's {min}..={max} range")]
    ZoomRange { zoom: u8, min: u8, max: u8 },

    #[error("affected areas file is not a feature collection")]
    NotAFeatureCollection,

    #[error("activate at least one layer to build a profile")]
    NoVisibleLayers,

    #[error("{0}")]
    Tile(#[from] RastileError),

    #[error("{0}")]
    Compare(#[from] SplitViewError),

    #[error("{0}")]
    Profile(#[from] ElevProfError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
