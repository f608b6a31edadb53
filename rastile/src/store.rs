//! On-demand tile fetch and cache.

use crate::{RastileError, TileCoord, UrlTemplate, Whiteout};
use dashmap::DashMap;
use image::RgbaImage;
use log::debug;
use std::sync::Arc;

/// Decodes raw tile bytes into an RGBA raster.
///
/// A tile that fails to decode is an error, never a blank raster, so
/// the rendering pipeline can tell a broken tile from one that is
/// transparent on purpose.
pub fn decode_tile(bytes: &[u8]) -> Result<RgbaImage, RastileError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Imagery tile aggregator for one layer.
///
/// Tiles are fetched over HTTP on first use, decoded, optionally run
/// through the whiteout filter, and kept in memory. A failed fetch or
/// decode is returned to the caller and nothing is cached, so the
/// next request for the same tile retries.
pub struct TileStore {
    http: reqwest::blocking::Client,
    template: UrlTemplate,
    whiteout: Option<Whiteout>,

    /// Tiles which have been loaded on demand.
    tiles: DashMap<TileCoord, Arc<RgbaImage>>,
}

impl TileStore {
    pub fn new(template: UrlTemplate, whiteout: Option<Whiteout>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            template,
            whiteout,
            tiles: DashMap::new(),
        }
    }

    pub fn template(&self) -> &UrlTemplate {
        &self.template
    }

    /// Returns the decoded (and filtered, when configured) tile at
    /// `coord`, fetching it if this store hasn't seen it yet.
    pub fn get(&self, coord: TileCoord) -> Result<Arc<RgbaImage>, RastileError> {
        self.tiles
            .entry(coord)
            .or_try_insert_with(|| self.fetch(coord).map(Arc::new))
            .map(|tile| tile.clone())
    }
}

/// Private API.
impl TileStore {
    fn fetch(&self, coord: TileCoord) -> Result<RgbaImage, RastileError> {
        let url = self.template.url_for(coord);
        debug!("fetching {url}");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RastileError::Status { status, url });
        }

        let bytes = response.bytes()?;
        let mut tile = decode_tile(&bytes)?;
        if let Some(whiteout) = self.whiteout {
            whiteout.apply(&mut tile);
        }
        Ok(tile)
    }
}
