use std::time::Duration;

use reqwest::blocking::Client;

use super::types::ReverseResponse;
use crate::sdk::routing::error::RouteError;
use crate::sdk::routing::route::RouteSummary;
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::routing::state::LngLat;

/// Self-hosted stack: an OSRM-compatible proxy that takes the coordinate
/// pair as a query parameter, and a Nominatim-compatible reverse geocoder.
/// No rate limiting; the instances are our own.
pub struct LocalProvider {
    client: Client,
    osrm_url: String,
    nominatim_url: String,
}

impl LocalProvider {
    pub fn new(osrm_url: String, nominatim_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap(),
            osrm_url,
            nominatim_url,
        }
    }
}

impl RoutingProvider for LocalProvider {
    fn reverse_geocode(&self, point: LngLat) -> Result<Option<String>, RouteError> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.nominatim_url, point.lat, point.lng
        );
        log::debug!("[PROVIDER] Calling local reverse_geocode for {}", point);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Status(status));
        }

        let body: ReverseResponse = serde_json::from_str(&response.text()?)?;
        Ok(body.display_name)
    }

    fn get_directions(&self, start: LngLat, end: LngLat) -> Result<RouteSummary, RouteError> {
        let url = format!("{}?coordinates={};{}", self.osrm_url, start, end);
        log::debug!("[PROVIDER] Calling local get_directions {} -> {}", start, end);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let text = response.text()?;
        super::parse_directions(status, &text)
    }
}
