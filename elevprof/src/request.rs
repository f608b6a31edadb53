use geo::geometry::Coord;
use serde::Serialize;

/// Samples requested along a path unless the caller asks otherwise.
pub const DEFAULT_SAMPLES: usize = 100;

/// One elevation profile request.
///
/// The service takes the drawn path as `[lon, lat]` pairs, the
/// imagery source file to sample, and how many samples to return.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub coordinates: Vec<[f64; 2]>,
    pub file: String,
    pub num_samples: usize,
}

impl ProfileRequest {
    pub fn new(path: &[Coord<f64>], source: impl Into<String>, num_samples: usize) -> Self {
        Self {
            coordinates: path.iter().map(|coord| [coord.x, coord.y]).collect(),
            file: source.into(),
            num_samples,
        }
    }
}
