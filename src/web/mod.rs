mod error;
pub mod log;
pub mod midware;
pub mod routes;
pub mod types;

pub use error::{ClientError, Error, Result};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
