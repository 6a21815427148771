use serde::Deserialize;

// --- Data structures for parsing collaborator responses ---

/// Nominatim-style reverse geocoding response; only the display name is
/// used.
#[derive(Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// OSRM-style directions response.
#[derive(Deserialize)]
pub struct DirectionsResponse {
    pub routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
pub struct OsrmRoute {
    pub geometry: geojson::Geometry,
    pub distance: f64,
    pub duration: f64,
}
