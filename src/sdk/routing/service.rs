use super::error::RouteError;
use super::route::RouteSummary;
use super::state::LngLat;

pub trait RoutingProvider: Send + Sync {
    /// Resolves a clicked coordinate to a human-readable address label.
    /// `None` when the geocoder has nothing to say about the point.
    fn reverse_geocode(&self, point: LngLat) -> Result<Option<String>, RouteError>;

    /// Gets a driving route between two points.
    fn get_directions(&self, start: LngLat, end: LngLat) -> Result<RouteSummary, RouteError>;
}
