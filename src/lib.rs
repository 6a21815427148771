pub mod sdk;

pub use sdk::config::ProviderConfig;
pub use sdk::notify::{Notice, NoticeLevel, Notifier};
pub use sdk::routing::check::RouteCheck;
pub use sdk::routing::route::RouteSummary;
pub use sdk::routing::service::RoutingProvider;
pub use sdk::routing::state::{CursorStyle, Endpoint, LngLat, RoutePoint, RouteStore};
