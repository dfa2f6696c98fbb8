//! campus-nav: interactive meeting-point finder over a campus OSM extract.
//!
//! Loads buildings, waypoints and footways from a JSON map, builds the
//! pathway network, then repeatedly asks for two buildings and prints where
//! the two people should meet and how each one walks there.
//!
//! Set `RUST_LOG=debug` to see network-construction and routing diagnostics
//! on stderr.

mod session;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_core::{NetworkConfig, DEFAULT_LINK_RADIUS_MILES};
use nav_query::Campus;
use nav_spatial::load_map_path;

use session::Session;

#[derive(Debug, Parser)]
#[command(name = "campus-nav", version, about = "Find a meeting building between two campus buildings")]
struct Cli {
    /// JSON map with `buildings`, `waypoints` and `footways` arrays.
    #[arg(long, default_value = "data/uic-fa24.osm.json")]
    map: PathBuf,

    /// Maximum building-to-waypoint link distance, in miles.
    #[arg(long, default_value_t = DEFAULT_LINK_RADIUS_MILES)]
    link_radius: f64,

    /// Significant digits for printed coordinates and distances.
    #[arg(long, default_value_t = 8)]
    precision: usize,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    println!("** Navigating UIC open street map **");

    let config = NetworkConfig::new(cli.link_radius).context("invalid --link-radius")?;
    let data = load_map_path(&cli.map)
        .with_context(|| format!("failed to load map {}", cli.map.display()))?;
    let campus = Campus::from_map(data, &config).context("failed to build pathway network")?;

    println!("# of buildings: {}", campus.buildings().len());
    println!("# of vertices: {}", campus.graph().vertex_count());
    println!("# of edges: {}", campus.graph().edge_count());
    info!(map = %cli.map.display(), link_radius = config.link_radius_miles, "campus loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&campus, cli.precision).run(stdin.lock(), stdout.lock())?;

    println!("** Done **");
    Ok(())
}
