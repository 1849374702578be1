pub mod api;
pub mod error;

pub use api::{BinanceAPI, DEFAULT_TIMEOUT};
pub use error::BinanceError;
