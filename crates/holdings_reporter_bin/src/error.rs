use quiver_api::QuiverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Please set the QUIVER_API_TOKEN environment variable")]
    MissingToken,

    #[error("QUIVER_API_TOKEN contains characters that cannot be sent in a header")]
    InvalidToken,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {status} from Quiver: {detail}")]
    Remote { status: u16, detail: String },

    #[error("Unexpected response: {0}")]
    UnexpectedShape(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl From<QuiverError> for ReportError {
    fn from(err: QuiverError) -> ReportError {
        match err {
            QuiverError::InvalidToken => ReportError::InvalidToken,
            QuiverError::Transport(reason) => ReportError::Transport(reason),
            QuiverError::Status { status, detail } => ReportError::Remote { status, detail },
            QuiverError::UnexpectedShape(reason) => ReportError::UnexpectedShape(reason),
        }
    }
}
