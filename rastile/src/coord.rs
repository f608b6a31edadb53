use geo::geometry::Coord;

/// Square tile edge length in pixels.
pub const TILE_SIZE: u32 = 256;

/// Latitude limit of the web mercator projection.
const MAX_LAT: f64 = 85.051_128_78;

/// Slippy-map tile address.
///
/// `x` counts columns east from the antimeridian, `y` counts rows
/// south from the north edge of the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    /// Returns the tile containing `coord` at `zoom`.
    ///
    /// Latitudes beyond the projection limit land in the first or
    /// last tile row rather than out of range.
    pub fn from_lonlat(coord: Coord<f64>, zoom: u8) -> Self {
        let lat = coord.y.clamp(-MAX_LAT, MAX_LAT);
        let n = 2_f64.powi(i32::from(zoom));
        let max_index = n - 1.0;

        let x = ((coord.x + 180.0) / 360.0 * n).floor();
        let lat_rad = lat.to_radians();
        let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0
            * n)
            .floor();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self {
            zoom,
            x: x.clamp(0.0, max_index) as u32,
            y: y.clamp(0.0, max_index) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, TileCoord};

    const CORDOBA: Coord = Coord {
        x: -64.1888,
        y: -31.4201,
    };

    #[test]
    fn test_zoom_zero_is_the_single_tile() {
        let tile = TileCoord::from_lonlat(Coord { x: 0.0, y: 0.0 }, 0);
        assert_eq!(tile, TileCoord { zoom: 0, x: 0, y: 0 });
    }

    #[test]
    fn test_origin_lands_south_east_of_the_split() {
        let tile = TileCoord::from_lonlat(Coord { x: 0.0, y: 0.0 }, 1);
        assert_eq!(tile, TileCoord { zoom: 1, x: 1, y: 1 });
    }

    #[test]
    fn test_known_tiles() {
        assert_eq!(
            TileCoord::from_lonlat(CORDOBA, 12),
            TileCoord {
                zoom: 12,
                x: 1317,
                y: 2424
            }
        );
        assert_eq!(
            TileCoord::from_lonlat(CORDOBA, 8),
            TileCoord {
                zoom: 8,
                x: 82,
                y: 151
            }
        );
    }

    #[test]
    fn test_polar_latitudes_clamp_to_edge_rows() {
        let north = TileCoord::from_lonlat(Coord { x: 0.0, y: 89.9 }, 4);
        assert_eq!(north, TileCoord { zoom: 4, x: 8, y: 0 });

        let south = TileCoord::from_lonlat(Coord { x: 0.0, y: -89.9 }, 4);
        assert_eq!(south, TileCoord { zoom: 4, x: 8, y: 15 });
    }
}
