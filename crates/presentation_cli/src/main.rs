//! CityBus CLI
//!
//! Terminal front end for the bus network: stop and route listings, live
//! buses, nearby stops, stop search, journey planning and a GeoJSON map.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{
    ApplicationError, DEFAULT_CENTER, Endpoint, GeolocationPort, InputMode, JourneySearch,
    MapLayers, MapScene, MapStatus, MapView, PlacePicker, TransitDataStore, live_statuses,
    nearby_stops, route_board, suggest,
};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use domain::{GeoLocation, KnownStop};
use infrastructure::{
    AppConfig, ConfiguredGeolocation, GeoJsonMapRenderer, PlaceSearchAdapter, init_logging,
    load_transit_data,
};
use tracing::warn;

/// Stops listed by `nearby`
const NEARBY_LIMIT: usize = 5;

/// CityBus CLI
#[derive(Parser)]
#[command(name = "citybus-cli")]
#[command(author, version, about = "CityBus city bus companion", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./citybus.toml if present)
    #[arg(short, long, env = "CITYBUS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every stop with its routes and amenities
    Stops,

    /// List routes with their service status
    Routes {
        /// Time of day to check service at, as HH:MM (default: now)
        #[arg(long, value_parser = parse_time)]
        at: Option<NaiveTime>,
    },

    /// Show live bus positions
    Buses,

    /// Stops closest to a position (default: the configured device location)
    Nearby {
        /// Latitude
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Suggest stops whose name contains the query
    Suggest {
        /// Partial stop name
        query: String,
    },

    /// Find routes between two stops or places
    ///
    /// Example: citybus-cli plan --from "City Bus Stand" --to "Railway Station"
    Plan {
        /// Origin stop name (or address with --from-place)
        #[arg(long)]
        from: String,

        /// Destination stop name (or address with --to-place)
        #[arg(long)]
        to: String,

        /// Treat the origin as an address for the place service
        #[arg(long)]
        from_place: bool,

        /// Treat the destination as an address for the place service
        #[arg(long)]
        to_place: bool,
    },

    /// Print the map as GeoJSON
    Map {
        /// Hide stop markers
        #[arg(long)]
        no_stops: bool,

        /// Hide bus markers
        #[arg(long)]
        no_buses: bool,

        /// Hide route lines
        #[arg(long)]
        no_routes: bool,
    },
}

/// Determine log filter level from verbosity count
///
/// `None` leaves the configured filter in place.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Parse a 24-hour "HH:MM" time
fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| format!("expected HH:MM, got '{value}'"))
}

fn geolocation(config: &AppConfig) -> Arc<ConfiguredGeolocation> {
    Arc::new(ConfiguredGeolocation::from_config(
        config.device_location.as_ref(),
    ))
}

fn place_picker(config: &AppConfig) -> Result<PlacePicker, ApplicationError> {
    let places = PlaceSearchAdapter::from_config(&config.maps)?;
    Ok(PlacePicker::new(Arc::new(places), geolocation(config)))
}

/// One side of a `plan` request: endpoint, text, and whether it is an address
type PlanSide<'a> = (Endpoint, &'a str, bool);

/// Resolve an address side through the place service
///
/// Returns `false` when the lookup failed and a notice was printed.
async fn pick_place(
    search: &mut JourneySearch,
    picker: &PlacePicker,
    endpoint: Endpoint,
    text: &str,
) -> bool {
    match picker.pick_address(text).await {
        Ok(place) => {
            println!("📍 {endpoint}: {}", place.address);
            search.select_place(endpoint, place);
            true
        },
        Err(e) => {
            warn!(error = %e, %endpoint, "Place lookup failed");
            println!("⚠️  {endpoint}: {}", e.user_notice());
            false
        },
    }
}

/// Type the stop-name sides in stop mode so they get suggestions
fn type_stop_sides(search: &mut JourneySearch, sides: &[PlanSide<'_>]) {
    search.set_input_mode(InputMode::KnownStops);
    for &(endpoint, text, as_place) in sides {
        if !as_place {
            search.type_query(endpoint, text);
        }
    }
}

/// Hints for endpoints that did not resolve to a stop
fn unresolved_notices(
    search: &JourneySearch,
    store: &TransitDataStore,
    skip: &[Endpoint],
) -> Vec<String> {
    [Endpoint::Origin, Endpoint::Destination]
        .into_iter()
        .filter(|endpoint| !skip.contains(endpoint))
        .filter_map(|endpoint| {
            let text = search.state().text(endpoint);
            if search.state().stop(endpoint).is_some() || store.stop_named(text).is_some() {
                return None;
            }
            let names: Vec<&str> = search
                .suggestions(endpoint)
                .into_iter()
                .map(KnownStop::name)
                .collect();
            Some(if names.is_empty() {
                format!("❓ {endpoint}: no stop matches '{text}'")
            } else {
                format!("❓ {endpoint}: did you mean {}?", names.join(", "))
            })
        })
        .collect()
}

async fn plan(
    config: &AppConfig,
    store: Arc<TransitDataStore>,
    (from, from_place): (&str, bool),
    (to, to_place): (&str, bool),
) -> anyhow::Result<()> {
    let sides = [
        (Endpoint::Origin, from, from_place),
        (Endpoint::Destination, to, to_place),
    ];
    let mut search = JourneySearch::new(Arc::clone(&store));
    let mut failed = Vec::new();

    if from_place || to_place {
        let picker =
            place_picker(config).context("place search needs maps.api_key to be configured")?;
        search.set_input_mode(InputMode::AnyLocation);
        for &(endpoint, text, as_place) in &sides {
            if as_place && !pick_place(&mut search, &picker, endpoint, text).await {
                failed.push(endpoint);
            }
        }
    }
    type_stop_sides(&mut search, &sides);

    if !search.search() {
        for line in unresolved_notices(&search, &store, &failed) {
            println!("{line}");
        }
        return Ok(());
    }

    if let Some(routes) = search.results() {
        for line in render::journey_lines(&routes) {
            println!("{line}");
        }
    }
    Ok(())
}

async fn nearby(
    config: &AppConfig,
    store: &TransitDataStore,
    position: Option<(f64, f64)>,
) -> anyhow::Result<()> {
    let origin = match position {
        Some((lat, lon)) => GeoLocation::new(lat, lon)?,
        None => match geolocation(config).current_location().await {
            Ok(location) => location,
            Err(e) => {
                println!("⚠️  {}", e.user_notice());
                return Ok(());
            },
        },
    };

    // Without a maps key the address line is skipped
    if let Ok(picker) = place_picker(config) {
        match picker.describe(&origin).await {
            Ok(address) => println!("📍 {address}"),
            Err(e) => warn!(error = %e, "Reverse geocoding failed"),
        }
    }

    for stop in nearby_stops(store, origin, NEARBY_LIMIT) {
        println!("{}", render::nearby_line(&stop));
    }
    Ok(())
}

fn print_map(config: &AppConfig, store: &TransitDataStore, layers: MapLayers) -> anyhow::Result<()> {
    let center = config
        .maps
        .center
        .to_geo_location()
        .unwrap_or(DEFAULT_CENTER);
    let zoom = config.maps.zoom;

    let mut view = MapView::new(GeoJsonMapRenderer::new(
        config.maps.api_key_str().is_some(),
    ));
    if let MapStatus::Failed(notice) = view.open(center, zoom) {
        eprintln!("⚠️  {notice}");
        return Ok(());
    }

    view.show(&MapScene::build(store, layers, center, zoom))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&view.renderer().feature_collection())?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;
    config.validate()?;

    let store = Arc::new(load_transit_data(&config.data).context("loading transit data")?);

    match cli.command {
        Commands::Stops => {
            for stop in store.stops() {
                println!("{}", render::stop_line(&store, stop));
            }
        },

        Commands::Routes { at } => {
            let at = at.unwrap_or_else(|| chrono::Local::now().time());
            println!("🕒 Service at {}", at.format("%H:%M"));
            for entry in route_board(&store, at) {
                println!("{}", entry.line());
            }
        },

        Commands::Buses => {
            let statuses = live_statuses(&store);
            if statuses.is_empty() {
                println!("No buses are being tracked.");
            }
            for status in &statuses {
                println!("{}", render::bus_line(status));
            }
        },

        Commands::Nearby { lat, lon } => {
            nearby(&config, &store, lat.zip(lon)).await?;
        },

        Commands::Suggest { query } => {
            for stop in suggest(&query, store.stops()) {
                println!("{}  {}", stop.code(), stop.name());
            }
        },

        Commands::Plan {
            from,
            to,
            from_place,
            to_place,
        } => {
            plan(&config, store, (&from, from_place), (&to, to_place)).await?;
        },

        Commands::Map {
            no_stops,
            no_buses,
            no_routes,
        } => {
            let layers = MapLayers {
                stops: !no_stops,
                buses: !no_buses,
                routes: !no_routes,
            };
            print_map(&config, &store, layers)?;
        },
    }

    Ok(())
}
