use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use geo_types::LineString;

use crate::sdk::notify::{Notice, Notifier};

use super::animate::RouteAnimator;
use super::cache::LabelCache;
use super::error::RouteError;
use super::service::RoutingProvider;
use super::state::{Endpoint, LngLat, RoutePoint, RouteStore};

/// Reveal duration the map frontend uses.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(1000);
/// Roughly one frame per display refresh.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Orchestrates the check-route feature: selection mode, click resolution,
/// route fetching and the reveal animation.
pub struct RouteCheck {
    store: RouteStore,
    provider: Arc<dyn RoutingProvider>,
    notifier: Notifier,
    animator: RouteAnimator,
    labels: LabelCache,
    frame_sink: Option<Sender<LineString<f64>>>,
    fetch: Option<JoinHandle<()>>,
    animation: Duration,
    frame_interval: Duration,
}

impl RouteCheck {
    pub fn new(provider: Arc<dyn RoutingProvider>, notifier: Notifier) -> Self {
        Self {
            store: RouteStore::new(),
            provider,
            notifier,
            animator: RouteAnimator::new(),
            labels: LabelCache::default(),
            frame_sink: None,
            fetch: None,
            animation: DEFAULT_ANIMATION,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }

    /// Overrides the reveal timing; mostly useful for headless runs.
    pub fn with_animation(mut self, duration: Duration, frame_interval: Duration) -> Self {
        self.animation = duration;
        self.frame_interval = frame_interval;
        self
    }

    /// Seeds the resolver with previously cached address labels.
    pub fn with_labels(mut self, labels: LabelCache) -> Self {
        self.labels = labels;
        self
    }

    pub fn store(&self) -> &RouteStore {
        &self.store
    }

    pub fn labels(&self) -> &LabelCache {
        &self.labels
    }

    /// Attaches a channel the animator mirrors every frame into; the map
    /// renderer redraws the partial route from it.
    pub fn frame_stream(&mut self) -> Receiver<LineString<f64>> {
        let (tx, rx) = mpsc::channel();
        self.frame_sink = Some(tx);
        rx
    }

    /// Arms selection mode: the next map click designates `which`.
    pub fn begin_selecting(&self, which: Endpoint) {
        self.store.begin_selecting(which);
    }

    /// Drops out of selection mode without committing a point.
    pub fn cancel_selecting(&self) {
        self.store.cancel_selecting();
    }

    /// Map click while selecting: resolve an address label for the point
    /// and commit it as the active endpoint. A rapid second click may
    /// overwrite the first resolution; last resolved wins.
    pub fn handle_map_click(&mut self, lng_lat: LngLat) {
        let Some(which) = self.store.active_selection() else {
            return;
        };

        match self.resolve_label(lng_lat) {
            Ok(label) => {
                self.store.set_point(which, Some(RoutePoint { lng_lat, label }));
                self.store.end_selecting(which);
                self.store.reset_cursor();
                self.refresh_route();
            }
            Err(err) => {
                log::warn!("Reverse geocode for {} failed: {}", lng_lat, err);
                self.notifier.notify(Notice::destructive(
                    "Address name fetch failed.",
                    "There was a problem with getting address name.",
                ));
                // Selection stays armed; only the pointer affordance is
                // restored.
                self.store.reset_cursor();
            }
        }
    }

    fn resolve_label(&mut self, lng_lat: LngLat) -> Result<String, RouteError> {
        if let Some(label) = self.labels.get(lng_lat) {
            log::debug!("[CACHE HIT] label for {}", lng_lat);
            return Ok(label);
        }

        let name = self.provider.reverse_geocode(lng_lat)?;
        let label = match name {
            Some(name) if !name.is_empty() => name,
            _ => "N/A".to_string(),
        };
        if label != "N/A" {
            self.labels.insert(lng_lat, &label);
        }
        Ok(label)
    }

    /// Clears one endpoint and its selection flag, as the panel's clear
    /// button does.
    pub fn clear_point(&mut self, which: Endpoint) {
        self.store.set_point(which, None);
        self.store.end_selecting(which);
        self.store.reset_cursor();
    }

    /// Swaps the endpoints and refreshes the route for the new pair.
    pub fn reverse_points(&mut self) {
        self.store.reverse_points();
        self.refresh_route();
    }

    /// Tears the whole feature down, stopping any in-flight animation.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.animator.cancel();
    }

    /// Fetches the route for the current endpoint pair on a worker thread.
    /// A pair change while the request is out bumps the sequence token, so
    /// the stale response is discarded on arrival.
    fn refresh_route(&mut self) {
        let Some((start, end, token)) = self.store.begin_fetch() else {
            return;
        };

        let store = self.store.clone();
        let provider = Arc::clone(&self.provider);
        let notifier = self.notifier.clone();
        let animator = self.animator.clone();
        let frames = self.frame_sink.clone();
        let (animation, frame_interval) = (self.animation, self.frame_interval);

        self.fetch = Some(thread::spawn(move || {
            match provider.get_directions(start.lng_lat, end.lng_lat) {
                Ok(route) => {
                    let geometry = route.geometry.clone();
                    if store.commit_route(token, route) {
                        animator.start(store, token, geometry, animation, frame_interval, frames);
                    } else {
                        log::debug!("Discarding stale route response");
                    }
                }
                Err(err) => {
                    log::warn!("Route fetch failed: {}", err);
                    notifier.notify(Notice::destructive(
                        "Get routes failed.",
                        "There was a problem with your request.",
                    ));
                }
            }
        }));
    }

    /// Joins the in-flight fetch and animation; the store then holds the
    /// final route and the fully revealed geometry.
    pub fn settle(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            let _ = fetch.join();
        }
        self.animator.wait();
    }
}

impl Drop for RouteCheck {
    fn drop(&mut self) {
        self.animator.cancel();
    }
}
