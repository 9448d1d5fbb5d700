//! campus-paths — walking directions between campus buildings.
//!
//! ```text
//! campus-paths buildings
//! campus-paths route CSE GYM
//! campus-paths nearest 210 110
//! campus-paths script crates/cp-script/scripts/find_path.test
//! ```
//!
//! Record files default to `data/campus_buildings.tsv` and
//! `data/campus_paths.tsv`; override with `--buildings` / `--paths` or the
//! `CAMPUS_BUILDINGS` / `CAMPUS_PATHS` environment variables.  Logs go to
//! stderr (`RUST_LOG`, default `info`) so stdout carries only results.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cp_core::Point;
use cp_map::{CampusMap, MapConfig};
use cp_script::ScriptDriver;

#[derive(Parser)]
#[command(name = "campus-paths")]
#[command(about = "Shortest walking routes between campus buildings", long_about = None)]
struct Cli {
    /// Building records (shortName, longName, x, y)
    #[arg(long, env = "CAMPUS_BUILDINGS", default_value = "data/campus_buildings.tsv", global = true)]
    buildings: PathBuf,

    /// Walkable segment records (x1, y1, x2, y2, distance)
    #[arg(long, env = "CAMPUS_PATHS", default_value = "data/campus_paths.tsv", global = true)]
    paths: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a graph script and print its transcript
    Script {
        /// Script file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// List every building, short name and long name
    Buildings,
    /// Shortest route between two buildings
    Route {
        /// Short name of the starting building
        start: String,
        /// Short name of the destination building
        end: String,
    },
    /// Buildings closest to a map coordinate
    Nearest {
        x: f64,
        y: f64,
        /// How many buildings to list
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = MapConfig::new(&cli.buildings, &cli.paths);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Script { file } => run_script(file.as_ref(), &mut out)?,
        Commands::Buildings => list_buildings(&load_map(&config)?, &mut out)?,
        Commands::Route { start, end } => route(&load_map(&config)?, &start, &end, &mut out)?,
        Commands::Nearest { x, y, count } => {
            nearest(&load_map(&config)?, Point::new(x, y), count, &mut out)?
        }
    }
    Ok(())
}

fn load_map(config: &MapConfig) -> Result<CampusMap> {
    let t0 = Instant::now();
    let map = config.load().with_context(|| {
        format!(
            "loading campus map from {} and {}",
            config.buildings.display(),
            config.paths.display()
        )
    })?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "map ready");
    Ok(map)
}

fn run_script(file: Option<&PathBuf>, out: &mut impl Write) -> Result<()> {
    let input: Box<dyn BufRead> = match file {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
        None => Box::new(io::stdin().lock()),
    };
    let mut driver = ScriptDriver::new(out);
    driver.run(input)?;
    Ok(())
}

fn list_buildings(map: &CampusMap, out: &mut impl Write) -> Result<()> {
    for (short, long) in map.building_names() {
        writeln!(out, "{short}: {long}")?;
    }
    Ok(())
}

fn route(map: &CampusMap, start: &str, end: &str, out: &mut impl Write) -> Result<()> {
    let from = map.long_name_for_short(start)?;
    let to = map.long_name_for_short(end)?;

    let Some(path) = map.find_shortest_path(start, end)? else {
        bail!("no route from {from} to {to}");
    };

    writeln!(out, "Path from {from} to {to}:")?;
    for seg in &path {
        writeln!(out, "    {} -> {}  {:.3}", seg.start, seg.end, seg.weight)?;
    }
    writeln!(out, "Total distance: {:.3}", path.cost())?;
    Ok(())
}

fn nearest(map: &CampusMap, pos: Point, count: usize, out: &mut impl Write) -> Result<()> {
    let found = map.nearest_buildings(pos, count);
    if found.is_empty() {
        bail!("the map has no buildings");
    }
    for short in found {
        let long = map.long_name_for_short(short)?;
        let at = map.point_for_short(short).unwrap_or(pos);
        writeln!(out, "{short}: {long} {at} ({:.3} away)", at.distance(pos))?;
    }
    Ok(())
}
