//! Elevation profiles along a drawn path.
//!
//! The viewer lets the user draw a line over the map and asks a
//! remote sampling service for the terrain elevation under it, once
//! per active imagery source. Requests for a batch run in parallel
//! and the batch is all-or-nothing: a chart is never built from a
//! partial set of sources.

mod batch;
mod client;
mod error;
mod request;
mod series;

pub use crate::{
    batch::batch,
    client::{Client, DEFAULT_ENDPOINT},
    error::ElevProfError,
    request::{ProfileRequest, DEFAULT_SAMPLES},
    series::ProfileSeries,
};
pub use geo;
