use serde::Deserialize;
use thiserror::Error;

// Helper struct to parse the JSON error body OSRM-compatible engines return
#[derive(Deserialize, Debug)]
pub struct OsrmErrorPayload {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("routing engine returned no route between the given points")]
    NoRoute,

    #[error("collaborator responded with status {0}")]
    Status(reqwest::StatusCode),

    // This variant holds the structured error from the routing engine
    #[error("API Error ({code}): {message}")]
    ApiError { code: String, message: String },

    // A fallback for when we get an error that isn't in the expected JSON format
    #[error("Unstructured API Error: {0}")]
    RawApiError(String),

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Route geometry is not a line string: {0}")]
    GeometryError(#[from] geojson::Error),
}
