use std::env;
use std::sync::Arc;

use crate::sdk::routing::provider::{HybridProvider, LocalProvider, RemoteProvider};
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::util::rate_limit::{directions_limiter, geocode_limiter};

/// How the collaborators are reached. The map frontend's production setup
/// is `Hybrid`: public Nominatim for labels, its own backend proxy for
/// directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    /// Public Nominatim and the public OSRM demo server.
    Remote,
    /// Self-hosted Nominatim and OSRM-compatible proxy.
    Local {
        osrm_url: String,
        nominatim_url: String,
    },
    /// Public Nominatim, self-hosted or proxied directions.
    Hybrid { osrm_url: String },
}

impl ProviderConfig {
    /// Reads `WALKERNEST_OSRM_URL` and `WALKERNEST_NOMINATIM_URL`; whatever
    /// is absent falls back to the public services.
    pub fn from_env() -> Self {
        let osrm = env::var("WALKERNEST_OSRM_URL").ok();
        let nominatim = env::var("WALKERNEST_NOMINATIM_URL").ok();
        match (osrm, nominatim) {
            (Some(osrm_url), Some(nominatim_url)) => Self::Local {
                osrm_url,
                nominatim_url,
            },
            (Some(osrm_url), None) => Self::Hybrid { osrm_url },
            _ => Self::Remote,
        }
    }

    pub fn build(self) -> Arc<dyn RoutingProvider> {
        match self {
            Self::Remote => Arc::new(RemoteProvider::new(
                geocode_limiter(),
                directions_limiter(),
            )),
            Self::Local {
                osrm_url,
                nominatim_url,
            } => Arc::new(LocalProvider::new(osrm_url, nominatim_url)),
            Self::Hybrid { osrm_url } => Arc::new(HybridProvider::new(osrm_url, geocode_limiter())),
        }
    }
}
