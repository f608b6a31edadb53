use serde::Deserialize;

/// Wire shape of a service response.
#[derive(Debug, Deserialize)]
pub(crate) struct WireProfile {
    #[serde(default)]
    pub(crate) profile: Vec<WireSample>,
}

/// One sample along the path. `elevation` is null where the source
/// has no data.
#[derive(Debug, Deserialize)]
pub(crate) struct WireSample {
    pub(crate) distance: f64,
    pub(crate) elevation: Option<f64>,
}

/// Chart-ready elevation profile for one imagery source.
///
/// No-data and non-finite samples are dropped and the rest sorted by
/// distance, which is the shape a line chart wants.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSeries {
    pub source: String,

    /// `(distance_m, elevation_m)` pairs, ascending by distance.
    pub points: Vec<(f64, f64)>,
}

impl ProfileSeries {
    pub(crate) fn parse(source: String, body: &str) -> Result<Self, serde_json::Error> {
        let wire: WireProfile = serde_json::from_str(body)?;
        Ok(Self::from_wire(source, wire))
    }

    pub(crate) fn from_wire(source: String, wire: WireProfile) -> Self {
        let mut points: Vec<(f64, f64)> = wire
            .profile
            .into_iter()
            .filter_map(|sample| sample.elevation.map(|elevation| (sample.distance, elevation)))
            .filter(|(distance, elevation)| distance.is_finite() && elevation.is_finite())
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { source, points }
    }

    /// Total charted distance, 0 for an empty series.
    pub fn distance_span(&self) -> f64 {
        self.points.last().map_or(0.0, |&(distance, _)| distance)
    }

    /// Lowest and highest elevation in the series.
    pub fn elevation_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |bounds, &(_, elevation)| {
            let (min, max) = bounds.unwrap_or((elevation, elevation));
            Some((min.min(elevation), max.max(elevation)))
        })
    }
}
