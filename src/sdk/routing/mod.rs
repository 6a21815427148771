pub mod animate;
pub mod cache;
pub mod check;
pub mod error;
pub mod provider;
pub mod route;
pub mod service;
pub mod state;


pub use animate::{reveal_prefix, RouteAnimator};
pub use cache::LabelCache;
pub use check::RouteCheck;
pub use error::RouteError;
pub use provider::{HybridProvider, LocalProvider, RemoteProvider};
pub use route::RouteSummary;
pub use service::RoutingProvider;
pub use state::{CursorStyle, Endpoint, LngLat, RoutePoint, RouteStore};
