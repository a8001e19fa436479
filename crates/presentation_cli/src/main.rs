//! trainsnow CLI
//!
//! Command-line front end for a Transiter instance: lists systems,
//! agencies, stops and routes, and shows stop arrivals.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use domain::{GeoLocation, Route, StopType};
use integration_transiter::{
    ApiError, ApiErrorKind, GetStopRequest, ListStopsRequest, RouteRequest, TransitApi,
    TransiterClient,
};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// trainsnow CLI
#[derive(Debug, Parser)]
#[command(name = "trainsnow-cli")]
#[command(author, version, about = "Realtime transit data from a Transiter instance", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./trainsnow.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Transiter base URL, overriding the configuration
    #[arg(long, env = "TRAINSNOW_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Print raw JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List transit systems
    Systems,

    /// Show one system
    System {
        /// System id, e.g. us-ny-nycsubway
        id: String,
    },

    /// List the agencies of a system
    Agencies {
        #[arg(short, long)]
        system: Option<String>,
    },

    /// Show one agency
    Agency {
        id: String,

        #[arg(short, long)]
        system: Option<String>,
    },

    /// List or search stops
    ///
    /// Example: trainsnow-cli stops --near=40.7527,-73.9772 --max-distance 0.5
    Stops {
        #[arg(short, long)]
        system: Option<String>,

        /// Only stops of this type (e.g. station, platform)
        #[arg(long = "type")]
        stop_type: Option<StopType>,

        /// Only the stop with this id
        #[arg(long)]
        id: Option<String>,

        /// Search by distance from LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        near: Option<GeoLocation>,

        /// Maximum distance in km for --near
        #[arg(long, requires = "near")]
        max_distance: Option<f64>,

        /// Continue from a previous page's next id
        #[arg(long)]
        first_id: Option<String>,

        #[arg(long, default_value_t = integration_transiter::DEFAULT_STOP_LIMIT)]
        limit: u32,

        #[command(flatten)]
        skip: StopSkipArgs,
    },

    /// Show a stop with its upcoming arrivals
    Stop {
        id: String,

        #[arg(short, long)]
        system: Option<String>,

        #[command(flatten)]
        skip: StopSkipArgs,
    },

    /// List routes
    Routes {
        #[arg(short, long)]
        system: Option<String>,

        /// Which routes to show
        #[arg(long, value_enum, default_value_t = Mode::All)]
        mode: Mode,

        #[command(flatten)]
        skip: RouteSkipArgs,
    },

    /// Show one route
    Route {
        id: String,

        #[arg(short, long)]
        system: Option<String>,

        #[command(flatten)]
        skip: RouteSkipArgs,
    },

    /// Check that the Transiter instance is reachable
    Health,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Args)]
struct StopSkipArgs {
    #[arg(long)]
    skip_stop_times: bool,
    #[arg(long)]
    skip_service_maps: bool,
    #[arg(long)]
    skip_alerts: bool,
    #[arg(long)]
    skip_transfers: bool,
}

impl From<StopSkipArgs> for GetStopRequest {
    fn from(skip: StopSkipArgs) -> Self {
        Self {
            skip_stop_times: skip.skip_stop_times,
            skip_service_maps: skip.skip_service_maps,
            skip_alerts: skip.skip_alerts,
            skip_transfers: skip.skip_transfers,
        }
    }
}

#[derive(Debug, Clone, Copy, Args)]
struct RouteSkipArgs {
    #[arg(long)]
    skip_estimated_headways: bool,
    #[arg(long)]
    skip_service_maps: bool,
    #[arg(long)]
    skip_alerts: bool,
}

impl From<RouteSkipArgs> for RouteRequest {
    fn from(skip: RouteSkipArgs) -> Self {
        Self {
            skip_estimated_headways: skip.skip_estimated_headways,
            skip_service_maps: skip.skip_service_maps,
            skip_alerts: skip.skip_alerts,
        }
    }
}

/// Route tab filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Subway,
    Bus,
    All,
}

impl Mode {
    fn includes(self, route: &Route) -> bool {
        match self {
            Self::Subway => route.is_subway(),
            Self::Bus => route.is_bus(),
            Self::All => true,
        }
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Process exit code for a failed operation
const fn exit_code(err: &ApiError) -> i32 {
    match err.kind() {
        ApiErrorKind::HttpClient => 2,
        _ => 1,
    }
}

/// Build the stop listing request from command-line filters
fn stops_request(
    stop_type: Option<StopType>,
    id: Option<String>,
    near: Option<GeoLocation>,
    max_distance: Option<f64>,
    first_id: Option<String>,
    limit: u32,
    skip: StopSkipArgs,
) -> ListStopsRequest {
    let mut request = ListStopsRequest {
        limit,
        skip_stop_times: skip.skip_stop_times,
        skip_service_maps: skip.skip_service_maps,
        skip_alerts: skip.skip_alerts,
        skip_transfers: skip.skip_transfers,
        ..ListStopsRequest::default()
    };
    if let Some(stop_type) = stop_type {
        request = request.with_type(stop_type);
    }
    if let Some(id) = id {
        request = request.with_id(id);
    }
    if let Some(location) = near {
        request = request.near(location, max_distance);
    }
    if let Some(first_id) = first_id {
        request = request.after(first_id);
    }
    request
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run one command against the client
#[allow(clippy::too_many_lines)]
async fn run(command: Commands, client: &dyn TransitApi, default_system: &str, json: bool) -> anyhow::Result<()> {
    let system_or_default = |system: Option<String>| system.unwrap_or_else(|| default_system.to_string());

    match command {
        Commands::Systems => {
            let reply = client.get_systems().await?;
            if json {
                return print_json(&reply);
            }
            for system in &reply.systems {
                println!("{}", render::system_line(system));
            }
        },

        Commands::System { id } => {
            let system = client.get_system(&id).await?;
            if json {
                return print_json(&system);
            }
            println!("{}", render::system_line(&system));
        },

        Commands::Agencies { system } => {
            let reply = client.get_agencies(&system_or_default(system)).await?;
            if json {
                return print_json(&reply);
            }
            for agency in &reply.agencies {
                print!("{}", render::agency_block(agency));
            }
        },

        Commands::Agency { id, system } => {
            let agency = client.get_agency(&system_or_default(system), &id).await?;
            if json {
                return print_json(&agency);
            }
            print!("{}", render::agency_block(&agency));
        },

        Commands::Stops {
            system,
            stop_type,
            id,
            near,
            max_distance,
            first_id,
            limit,
            skip,
        } => {
            let request = stops_request(stop_type, id, near, max_distance, first_id, limit, skip);
            let reply = client.get_stops(&system_or_default(system), &request).await?;
            if json {
                return print_json(&reply);
            }
            for stop in &reply.stops {
                println!("{}", render::stop_line(stop, near.as_ref()));
            }
            if let Some(next_id) = &reply.next_id {
                println!("\nMore results: --first-id {next_id}");
            }
        },

        Commands::Stop { id, system, skip } => {
            let stop = client
                .get_stop(&system_or_default(system), &id, &skip.into())
                .await?;
            if json {
                return print_json(&stop);
            }
            print!("{}", render::stop_detail(&stop));
        },

        Commands::Routes { system, mode, skip } => {
            let mut reply = client.get_routes(&system_or_default(system), &skip.into()).await?;
            reply.routes.retain(|route| mode.includes(route));
            Route::sort_for_display(&mut reply.routes);
            if json {
                return print_json(&reply);
            }
            for route in &reply.routes {
                println!("{}", render::route_line(route));
            }
        },

        Commands::Route { id, system, skip } => {
            let route = client
                .get_route(&system_or_default(system), &id, &skip.into())
                .await?;
            if json {
                return print_json(&route);
            }
            println!("{}", render::route_line(&route));
        },

        Commands::Health => {
            if client.is_healthy().await {
                println!("Healthy");
            } else {
                println!("Unhealthy");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(cli.verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.transiter.base_url = base_url;
    }
    tracing::debug!(base_url = %config.transiter.base_url, system = %config.default_system, "Configuration loaded");

    let client = TransiterClient::new(&config.transiter)?;

    if let Err(err) = run(cli.command, &client, &config.default_system, cli.json).await {
        let Some(api_err) = err.downcast_ref::<ApiError>() else {
            return Err(err);
        };
        eprintln!("error[{}]: {api_err}", api_err.kind());
        if let ApiError::HttpClient { body: Some(body), .. } | ApiError::HttpServer { body: Some(body), .. } =
            api_err
        {
            eprintln!("{body}");
        }
        std::process::exit(exit_code(api_err));
    }

    Ok(())
}
