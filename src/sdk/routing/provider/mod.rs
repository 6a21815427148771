pub mod hybrid;
pub mod local;
pub mod remote;
pub mod types;

pub use hybrid::HybridProvider;
pub use local::LocalProvider;
pub use remote::{RemoteProvider, DEFAULT_NOMINATIM_URL, DEFAULT_OSRM_URL};

use geo_types::LineString;
use reqwest::StatusCode;

use crate::sdk::routing::error::{OsrmErrorPayload, RouteError};
use crate::sdk::routing::route::RouteSummary;

use types::DirectionsResponse;

/// Turns a raw directions response into a `RouteSummary`. Non-success
/// bodies are parsed as a structured engine error first, falling back to
/// the raw text; a success body with an empty route list is an error too.
pub(crate) fn parse_directions(status: StatusCode, text: &str) -> Result<RouteSummary, RouteError> {
    if !status.is_success() {
        if let Ok(payload) = serde_json::from_str::<OsrmErrorPayload>(text) {
            return Err(RouteError::ApiError {
                code: payload.code,
                message: payload.message,
            });
        }
        return Err(RouteError::RawApiError(text.to_string()));
    }

    let response: DirectionsResponse = serde_json::from_str(text)?;
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(RouteError::NoRoute)?;
    let geometry: LineString<f64> = route.geometry.try_into()?;

    Ok(RouteSummary {
        geometry,
        distance_meters: route.distance,
        duration_seconds: route.duration,
    })
}
