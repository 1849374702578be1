use http_support::error_chain;
use thiserror::Error;

/// Everything that can go wrong while fetching a price. The message is what
/// the command line prints, so every variant reads as a complete sentence.
#[derive(Error, Debug)]
pub enum BinanceError {
    /// Non-success status. `detail` is the JSON error body when there is one,
    /// otherwise the reason phrase.
    #[error("HTTP {status} from Binance: {detail}")]
    Http { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse JSON response from Binance.")]
    Parse,

    /// Valid JSON of the wrong shape; carries the raw payload.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<reqwest::Error> for BinanceError {
    fn from(err: reqwest::Error) -> BinanceError {
        BinanceError::Network(error_chain(&err))
    }
}
