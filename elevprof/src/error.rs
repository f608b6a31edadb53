use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElevProfError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("profile service returned {status} for source {source_name}")]
    Status {
        status: reqwest::StatusCode,
        source_name: String,
    },

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("no imagery source to profile")]
    NoSources,

    #[error("a profile path needs at least 2 points, got {0}")]
    ShortPath(usize),
}
