pub mod api;
pub mod error;

pub use api::QuiverAPI;
pub use error::QuiverError;
