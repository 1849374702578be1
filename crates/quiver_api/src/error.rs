use http_support::error_chain;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuiverError {
    #[error("QUIVER_API_TOKEN is not a valid header value")]
    InvalidToken,

    #[error("request to Quiver failed: {0}")]
    Transport(String),

    #[error("HTTP {status} from Quiver: {detail}")]
    Status { status: u16, detail: String },

    /// The body was not JSON, or not an array of objects.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl From<reqwest::Error> for QuiverError {
    fn from(err: reqwest::Error) -> QuiverError {
        QuiverError::Transport(error_chain(&err))
    }
}
