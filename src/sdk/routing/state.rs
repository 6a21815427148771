use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use geo_types::LineString;
use serde::{Deserialize, Serialize};

use super::route::RouteSummary;

/// A geographic coordinate in map order (longitude first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

impl FromStr for LngLat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lng, lat) = s
            .split_once(',')
            .ok_or_else(|| format!("expected <lng>,<lat>, got \"{}\"", s))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad longitude: {}", e))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad latitude: {}", e))?;
        Ok(Self { lng, lat })
    }
}

/// Which end of the route a selection or point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// Pointer affordance on the map surface. Shared UI state; last writer wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Crosshair,
}

/// A committed route endpoint: where the user clicked plus the resolved
/// address label.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePoint {
    pub lng_lat: LngLat,
    pub label: String,
}

#[derive(Default)]
struct StoreInner {
    starting_point: Option<RoutePoint>,
    ending_point: Option<RoutePoint>,
    selecting_start: bool,
    selecting_end: bool,
    route: Option<RouteSummary>,
    animated_route: Option<LineString<f64>>,
    cursor: CursorStyle,
    // Bumped on every endpoint mutation. Fetches and animation frames carry
    // the value they started under and are rejected once it has moved on.
    route_seq: u64,
}

fn invalidate(s: &mut StoreInner) {
    s.route = None;
    s.animated_route = None;
    s.route_seq += 1;
}

/// The state container for the check-route feature. Clones share one
/// underlying store; background fetch and animation workers commit through
/// their own clone.
#[derive(Clone, Default)]
pub struct RouteStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap()
    }

    pub fn starting_point(&self) -> Option<RoutePoint> {
        self.lock().starting_point.clone()
    }

    pub fn ending_point(&self) -> Option<RoutePoint> {
        self.lock().ending_point.clone()
    }

    pub fn point(&self, which: Endpoint) -> Option<RoutePoint> {
        match which {
            Endpoint::Start => self.starting_point(),
            Endpoint::End => self.ending_point(),
        }
    }

    pub fn route(&self) -> Option<RouteSummary> {
        self.lock().route.clone()
    }

    pub fn animated_route(&self) -> Option<LineString<f64>> {
        self.lock().animated_route.clone()
    }

    pub fn cursor(&self) -> CursorStyle {
        self.lock().cursor
    }

    pub fn is_selecting(&self, which: Endpoint) -> bool {
        let s = self.lock();
        match which {
            Endpoint::Start => s.selecting_start,
            Endpoint::End => s.selecting_end,
        }
    }

    pub fn selecting_any(&self) -> bool {
        let s = self.lock();
        s.selecting_start || s.selecting_end
    }

    pub fn both_selected(&self) -> bool {
        let s = self.lock();
        s.starting_point.is_some() && s.ending_point.is_some()
    }

    /// The endpoint the next map click designates, if any. Start wins when
    /// both flags happen to be set.
    pub fn active_selection(&self) -> Option<Endpoint> {
        let s = self.lock();
        if s.selecting_start {
            Some(Endpoint::Start)
        } else if s.selecting_end {
            Some(Endpoint::End)
        } else {
            None
        }
    }

    /// Arms selection mode for one endpoint and requests the crosshair
    /// pointer.
    pub fn begin_selecting(&self, which: Endpoint) {
        let mut s = self.lock();
        match which {
            Endpoint::Start => s.selecting_start = true,
            Endpoint::End => s.selecting_end = true,
        }
        s.cursor = CursorStyle::Crosshair;
    }

    /// Clears both selection flags and restores the default pointer.
    pub fn cancel_selecting(&self) {
        let mut s = self.lock();
        s.selecting_start = false;
        s.selecting_end = false;
        s.cursor = CursorStyle::Default;
    }

    /// Clears one selection flag. The pointer goes back to default unless
    /// the other endpoint is still being selected.
    pub fn end_selecting(&self, which: Endpoint) {
        let mut s = self.lock();
        match which {
            Endpoint::Start => s.selecting_start = false,
            Endpoint::End => s.selecting_end = false,
        }
        if !s.selecting_start && !s.selecting_end {
            s.cursor = CursorStyle::Default;
        }
    }

    pub fn reset_cursor(&self) {
        self.lock().cursor = CursorStyle::Default;
    }

    /// Commits or clears an endpoint. Any endpoint change invalidates the
    /// current route and animation.
    pub fn set_point(&self, which: Endpoint, point: Option<RoutePoint>) {
        let mut s = self.lock();
        match which {
            Endpoint::Start => s.starting_point = point,
            Endpoint::End => s.ending_point = point,
        }
        invalidate(&mut s);
    }

    /// Swaps starting and ending points in one step; there is no
    /// intermediate state where both hold the same value.
    pub fn reverse_points(&self) {
        let mut s = self.lock();
        let s = &mut *s;
        std::mem::swap(&mut s.starting_point, &mut s.ending_point);
        invalidate(s);
    }

    /// Resets every field to its empty form and restores the default
    /// pointer.
    pub fn clear_all(&self) {
        let mut s = self.lock();
        s.starting_point = None;
        s.ending_point = None;
        s.selecting_start = false;
        s.selecting_end = false;
        s.cursor = CursorStyle::Default;
        invalidate(&mut s);
    }

    /// Starts a route fetch: returns the endpoint pair and the sequence
    /// token the commit must present later, and drops any stale partial
    /// geometry so it never renders while the request is pending. `None`
    /// unless both endpoints are set.
    pub fn begin_fetch(&self) -> Option<(RoutePoint, RoutePoint, u64)> {
        let mut s = self.lock();
        let (Some(start), Some(end)) = (s.starting_point.clone(), s.ending_point.clone()) else {
            return None;
        };
        s.animated_route = None;
        Some((start, end, s.route_seq))
    }

    /// Commits a fetched route, unless the endpoints changed since the
    /// fetch started.
    pub fn commit_route(&self, token: u64, route: RouteSummary) -> bool {
        let mut s = self.lock();
        if s.route_seq != token {
            return false;
        }
        s.route = Some(route);
        true
    }

    /// Commits one animation frame under the same staleness rule.
    pub fn commit_frame(&self, token: u64, frame: LineString<f64>) -> bool {
        let mut s = self.lock();
        if s.route_seq != token {
            return false;
        }
        s.animated_route = Some(frame);
        true
    }

    pub fn route_seq(&self) -> u64 {
        self.lock().route_seq
    }
}
