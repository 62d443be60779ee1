//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL cannot have path segments appended to it.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The base URL failed to parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Network failure, timeout, or a body that could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with anything other than 200 OK. The body is discarded.
    #[error("HTTP Status Code: {status}")]
    HttpStatus { status: reqwest::StatusCode },
    /// The body was not the JSON shape expected for the endpoint.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A plain-text endpoint returned something other than a quoted string.
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}
