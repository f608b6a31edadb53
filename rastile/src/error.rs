use thiserror::Error;

#[derive(Error, Debug)]
pub enum RastileError {
    #[error("tile url template {0:?} is missing a placeholder")]
    Template(String),

    #[error("{0}")]
    Fetch(#[from] reqwest::Error),

    #[error("tile server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("{0}")]
    Decode(#[from] image::ImageError),
}
