use crate::{batch, ElevProfError, ProfileRequest, ProfileSeries};
use geo::geometry::Coord;
use log::debug;

/// Where the sampling service listens unless told otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/api/elevation/profile";

/// Blocking client for the elevation sampling service.
pub struct Client {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl Client {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Samples one imagery source along `path`.
    ///
    /// A path shorter than 2 points is rejected before any request
    /// goes out.
    pub fn profile(
        &self,
        path: &[Coord<f64>],
        source: &str,
        num_samples: usize,
    ) -> Result<ProfileSeries, ElevProfError> {
        if path.len() < 2 {
            return Err(ElevProfError::ShortPath(path.len()));
        }

        let request = ProfileRequest::new(path, source, num_samples);
        debug!("sampling {source} at {num_samples} points");

        let response = self.http.post(&self.endpoint).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ElevProfError::Status {
                status,
                source_name: source.to_string(),
            });
        }

        let body = response.text()?;
        Ok(ProfileSeries::parse(source.to_string(), &body)?)
    }

    /// Samples every source in parallel, one request each.
    ///
    /// All-or-nothing: a single failed source fails the whole batch.
    pub fn profiles(
        &self,
        path: &[Coord<f64>],
        sources: &[String],
        num_samples: usize,
    ) -> Result<Vec<ProfileSeries>, ElevProfError> {
        batch(sources, |source| self.profile(path, source, num_samples))
    }
}
