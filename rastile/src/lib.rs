//! Satellite imagery tiles for burned-area mapping.
//!
//! Tiles follow the usual slippy-map convention: square 256 px rasters
//! addressed by `zoom/column/row` and served from a static URL template
//! per acquisition date.
//!
//! # References
//!
//! 1. [Slippy map tilenames](https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames)
//! 1. [Rec. 601 luma coefficients](https://en.wikipedia.org/wiki/Rec._601)

mod coord;
mod error;
mod store;
mod template;
mod whiteout;

pub use crate::{
    coord::{TileCoord, TILE_SIZE},
    error::RastileError,
    store::{decode_tile, TileStore},
    template::UrlTemplate,
    whiteout::{Whiteout, DEFAULT_LUMA_MIN, DEFAULT_SPREAD_MAX},
};
pub use image::RgbaImage;
