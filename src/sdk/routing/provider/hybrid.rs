use crate::sdk::routing::error::RouteError;
use crate::sdk::routing::route::RouteSummary;
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::routing::state::LngLat;
use crate::sdk::util::rate_limit::{directions_limiter, Limiter};

use super::local::LocalProvider;
use super::remote::{RemoteProvider, DEFAULT_NOMINATIM_URL};

/// The arrangement the map frontend runs in production: labels come from
/// public Nominatim, directions from our own OSRM proxy.
pub struct HybridProvider {
    remote: RemoteProvider,
    local: LocalProvider,
}

impl HybridProvider {
    pub fn new(osrm_url: String, geocode_limiter: Limiter) -> Self {
        Self {
            remote: RemoteProvider::new(geocode_limiter, directions_limiter()),
            local: LocalProvider::new(osrm_url, DEFAULT_NOMINATIM_URL.to_string()),
        }
    }
}

impl RoutingProvider for HybridProvider {
    fn reverse_geocode(&self, point: LngLat) -> Result<Option<String>, RouteError> {
        log::debug!("[Hybrid Provider] Using REMOTE for reverse_geocode");
        self.remote.reverse_geocode(point)
    }

    fn get_directions(&self, start: LngLat, end: LngLat) -> Result<RouteSummary, RouteError> {
        log::debug!("[Hybrid Provider] Using LOCAL for get_directions");
        self.local.get_directions(start, end)
    }
}
