use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::time::Duration;
use walkernest_route::{
    sdk::config::ProviderConfig,
    sdk::notify::{Notifier, NoticeLevel},
    sdk::routing::{
        cache::LabelCache,
        check::RouteCheck,
        state::{Endpoint, LngLat},
    },
    sdk::util::log::init_logging,
};

const LABEL_CACHE_FILE: &str = "label_cache.json";

/// Check the driving route between two points on the map
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Starting point as "lng,lat" (e.g. "-105.0,39.0")
    #[arg(short, long, allow_hyphen_values = true)]
    start: LngLat,

    /// Ending point as "lng,lat"
    #[arg(short, long, allow_hyphen_values = true)]
    end: LngLat,

    /// Reveal animation length in milliseconds (0 skips the effect)
    #[arg(long, default_value_t = 1000)]
    animate_ms: u64,

    /// Where to write the fetched route as GeoJSON
    #[arg(short, long, default_value = "route.geojson")]
    out: String,
}

fn main() -> Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = ProviderConfig::from_env();
    log::info!("Provider config: {:?}", config);
    let provider = config.build();

    let labels =
        LabelCache::load_from_file(LABEL_CACHE_FILE).context("Failed to load label cache")?;

    let (notifier, notices) = Notifier::channel();
    let mut check = RouteCheck::new(provider, notifier)
        .with_labels(labels)
        .with_animation(
            Duration::from_millis(cli.animate_ms),
            Duration::from_millis(16),
        );
    let frames = check.frame_stream();

    // Walk the same gesture sequence the map UI performs.
    check.begin_selecting(Endpoint::Start);
    check.handle_map_click(cli.start);
    check.begin_selecting(Endpoint::End);
    check.handle_map_click(cli.end);
    check.settle();

    for notice in notices.try_iter() {
        match notice.level {
            NoticeLevel::Destructive => log::error!("{} {}", notice.title, notice.description),
            NoticeLevel::Info => log::info!("{} {}", notice.title, notice.description),
        }
    }
    log::debug!("Route reveal produced {} frames", frames.try_iter().count());

    let route = check
        .store()
        .route()
        .with_context(|| format!("No route between {} and {}", cli.start, cli.end))?;

    let from = check
        .store()
        .starting_point()
        .map(|p| p.label)
        .unwrap_or_default();
    let to = check
        .store()
        .ending_point()
        .map(|p| p.label)
        .unwrap_or_default();
    let (km, mi) = route.distance_display();
    println!("{} -> {}", from, to);
    println!("{} mins ({} km / {} mi)", route.duration_mins(), km, mi);

    // Export the geometry the way the map layers consume it.
    let mut properties = geojson::JsonObject::new();
    properties.insert("distance".to_string(), route.distance_meters.into());
    properties.insert("duration".to_string(), route.duration_seconds.into());
    let feature = geojson::Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(
            &route.geometry,
        ))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    };
    let json = serde_json::to_string_pretty(&feature)?;
    let mut file = File::create(&cli.out)?;
    file.write_all(json.as_bytes())?;
    log::info!("Route written to {}", cli.out);

    check
        .labels()
        .save_to_file(LABEL_CACHE_FILE)
        .context("Failed to save label cache")?;

    Ok(())
}
