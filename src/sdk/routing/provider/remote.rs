use std::time::Duration;

use reqwest::blocking::Client;

use super::types::ReverseResponse;
use crate::sdk::routing::error::RouteError;
use crate::sdk::routing::route::RouteSummary;
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::routing::state::LngLat;
use crate::sdk::util::rate_limit::Limiter;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

// Nominatim rejects requests without an identifying agent
const USER_AGENT: &str = concat!("walkernest-route/", env!("CARGO_PKG_VERSION"));

/// Public Nominatim plus the public OSRM demo server, both rate limited.
pub struct RemoteProvider {
    client: Client,
    nominatim_url: String,
    osrm_url: String,
    geocode_limiter: Limiter,
    directions_limiter: Limiter,
}

impl RemoteProvider {
    pub fn new(geocode_limiter: Limiter, directions_limiter: Limiter) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .user_agent(USER_AGENT)
                .build()
                .unwrap(),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            osrm_url: DEFAULT_OSRM_URL.to_string(),
            geocode_limiter,
            directions_limiter,
        }
    }
}

impl RoutingProvider for RemoteProvider {
    fn reverse_geocode(&self, point: LngLat) -> Result<Option<String>, RouteError> {
        self.geocode_limiter.wait();
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.nominatim_url, point.lat, point.lng
        );
        log::debug!("[PROVIDER] Calling remote reverse_geocode for {}", point);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Status(status));
        }

        let body: ReverseResponse = serde_json::from_str(&response.text()?)?;
        Ok(body.display_name)
    }

    fn get_directions(&self, start: LngLat, end: LngLat) -> Result<RouteSummary, RouteError> {
        self.directions_limiter.wait();
        let url = format!(
            "{}/route/v1/driving/{};{}?overview=full&geometries=geojson",
            self.osrm_url, start, end
        );
        log::debug!("[PROVIDER] Calling remote get_directions {} -> {}", start, end);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let text = response.text()?;
        super::parse_directions(status, &text)
    }
}
