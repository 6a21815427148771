use geo_types::LineString;

/// A fetched driving route: the full line geometry plus the engine's totals.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub geometry: LineString<f64>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

impl RouteSummary {
    /// Duration in whole minutes, rounded up.
    pub fn duration_mins(&self) -> u64 {
        (self.duration_seconds / 60.0).ceil() as u64
    }

    /// Distance as `(km, mi)`, both rounded to one decimal place.
    pub fn distance_display(&self) -> (String, String) {
        (
            format!("{:.1}", self.distance_meters / 1000.0),
            format!("{:.1}", self.distance_meters / 1609.0),
        )
    }
}
