//! Load forecast requests from JSON files or readers

use super::ForecastRequest;
use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A file may hold one request or an array of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestFile {
    Many(Vec<ForecastRequest>),
    One(ForecastRequest),
}

/// Load a single request from a JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ForecastRequest> {
    let file = File::open(path)?;
    load_request_from_reader(BufReader::new(file))
}

/// Load a single request from any reader (e.g., string buffer, stdin)
pub fn load_request_from_reader<R: Read>(reader: R) -> Result<ForecastRequest> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load every request from a JSON file holding an object or an array
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<ForecastRequest>> {
    let file = File::open(path)?;
    load_requests_from_reader(BufReader::new(file))
}

/// Load every request from a reader holding an object or an array
pub fn load_requests_from_reader<R: Read>(reader: R) -> Result<Vec<ForecastRequest>> {
    let parsed: RequestFile = serde_json::from_reader(reader)?;
    let requests = match parsed {
        RequestFile::Many(requests) => requests,
        RequestFile::One(request) => vec![request],
    };
    log::debug!("Loaded {} forecast request(s)", requests.len());
    Ok(requests)
}
