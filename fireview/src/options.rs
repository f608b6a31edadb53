use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use firemap::{elevprof, rastile, splitview};
use geo::geometry::Coord;
use std::{path::PathBuf, str::FromStr};

/// Inspect wildfire imagery layers from the command line.
#[derive(Parser, Debug)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clear the alpha of near-white pixels in an image.
    Whiteout {
        /// Input image, PNG or JPEG.
        input: PathBuf,

        /// Output PNG.
        output: PathBuf,

        /// Luminosity a pixel must exceed to count as background.
        #[arg(long, default_value_t = rastile::DEFAULT_LUMA_MIN)]
        luma_min: f32,

        /// Channel spread a pixel must stay under to count as
        /// background.
        #[arg(long, default_value_t = rastile::DEFAULT_SPREAD_MAX)]
        spread_max: u8,
    },

    /// Resolve the tile URL covering a coordinate on a layer.
    TileUrl {
        /// Layer registry JSON.
        #[arg(short, long)]
        layers: PathBuf,

        /// Acquisition date of the layer.
        #[arg(short, long)]
        date: String,

        #[arg(long)]
        lat: f64,

        #[arg(long)]
        lon: f64,

        #[arg(short, long)]
        zoom: u8,
    },

    /// Print popup text for every zone in an affected-area file.
    Zones {
        /// Affected-area GeoJSON.
        file: PathBuf,

        /// Property keys to leave out of the popups.
        #[arg(long, value_delimiter = ',')]
        hide: Vec<String>,
    },

    /// Clip rectangles for a two-layer comparison.
    Compare {
        /// Layer registry JSON.
        #[arg(short, long)]
        layers: PathBuf,

        /// Left pane layer date.
        #[arg(long)]
        left: String,

        /// Right pane layer date.
        #[arg(long)]
        right: String,

        /// Divider position as a fraction of the viewport width.
        #[arg(short, long, default_value_t = splitview::DEFAULT_FRACTION)]
        fraction: f64,

        /// Viewport size as "WxH".
        #[arg(long, default_value = "1000x600")]
        view: ViewSize,

        /// Content origin as "x,y"; drifts away from 0,0 once the
        /// map is panned.
        #[arg(long, default_value = "0,0")]
        origin: PixelOrigin,
    },

    /// Build elevation profiles along a drawn path.
    Profile {
        /// Sampling service endpoint.
        #[arg(long, default_value = elevprof::DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Path drawn over the map, "lat,lon;lat,lon;...".
        #[arg(long)]
        path: ProfilePath,

        /// Imagery source files to sample.
        #[arg(long, value_delimiter = ',', required = true)]
        sources: Vec<String>,

        /// Samples per source.
        #[arg(long, default_value_t = elevprof::DEFAULT_SAMPLES)]
        samples: usize,

        #[command(subcommand)]
        format: ProfileFormat,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileFormat {
    /// Plot to terminal.
    Display,

    /// Print samples as JSON.
    Json,

    /// Render an SVG chart.
    Plot {
        /// Output file.
        #[arg(short, long, default_value = "profile.svg")]
        out: PathBuf,
    },
}

/// Path over the map as "lat,lon;lat,lon;...".
#[derive(Clone, Debug)]
pub struct ProfilePath(pub Vec<Coord<f64>>);

impl FromStr for ProfilePath {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let mut coords = Vec::new();
        for pair in s.split(';').filter(|pair| !pair.is_empty()) {
            let (lat_str, lon_str) = pair
                .split_once(',')
                .ok_or_else(|| anyhow!("{pair:?} is not a valid lat,lon pair"))?;
            let lat = f64::from_str(lat_str.trim())?;
            let lon = f64::from_str(lon_str.trim())?;
            coords.push(Coord { x: lon, y: lat });
        }
        Ok(Self(coords))
    }
}

/// Viewport size parsed from "WxH".
#[derive(Clone, Copy, Debug)]
pub struct ViewSize(pub f64, pub f64);

impl FromStr for ViewSize {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (width_str, height_str) = s
            .split_once('x')
            .ok_or_else(|| anyhow!("{s:?} is not a valid WxH size"))?;
        Ok(Self(f64::from_str(width_str)?, f64::from_str(height_str)?))
    }
}

/// Pixel position parsed from "x,y".
#[derive(Clone, Copy, Debug)]
pub struct PixelOrigin(pub f64, pub f64);

impl FromStr for PixelOrigin {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (x_str, y_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("{s:?} is not a valid x,y position"))?;
        Ok(Self(f64::from_str(x_str)?, f64::from_str(y_str)?))
    }
}

#[cfg(test)]
mod tests {
    use super::{PixelOrigin, ProfilePath, ViewSize};
    use std::str::FromStr;

    #[test]
    fn test_profile_path_parses_lat_lon_pairs() {
        let path = ProfilePath::from_str("-31.42,-64.19; -31.40,-64.18").unwrap();
        assert_eq!(path.0.len(), 2);
        assert_eq!(path.0[0].x, -64.19);
        assert_eq!(path.0[0].y, -31.42);
    }

    #[test]
    fn test_malformed_pairs_are_rejected() {
        assert!(ProfilePath::from_str("-31.42;-64.19").is_err());
        assert!(ViewSize::from_str("1000").is_err());
        assert!(PixelOrigin::from_str("12").is_err());
    }

    #[test]
    fn test_view_size_and_origin() {
        let size = ViewSize::from_str("1000x600").unwrap();
        assert_eq!((size.0, size.1), (1000.0, 600.0));

        let origin = PixelOrigin::from_str("-200,0").unwrap();
        assert_eq!((origin.0, origin.1), (-200.0, 0.0));
    }
}
