//! Forecast requests and JSON loading

mod data;
pub mod loader;

pub use data::{ForecastRequest, ResolvedRequest};
pub use loader::{load_request, load_request_from_reader, load_requests, load_requests_from_reader};
