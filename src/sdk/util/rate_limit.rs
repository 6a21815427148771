use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Blocking wrapper around a direct `governor` limiter. Clones share the
/// same quota, so one limiter can be handed to several providers.
#[derive(Clone)]
pub struct Limiter {
    inner: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl Limiter {
    pub fn per_second(cells: u32) -> Self {
        let quota = Quota::per_second(NonZeroU32::new(cells).unwrap());
        Self {
            inner: Arc::new(RateLimiter::direct(quota)),
        }
    }

    pub fn per_minute(cells: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(cells).unwrap());
        Self {
            inner: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Blocks the calling thread until the limiter admits one more call.
    pub fn wait(&self) {
        while self.inner.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }
    }
}

/// Public Nominatim allows at most one request per second.
pub fn geocode_limiter() -> Limiter {
    Limiter::per_second(1)
}

/// The public OSRM demo server has no published quota; stay conservative.
pub fn directions_limiter() -> Limiter {
    Limiter::per_minute(40)
}
