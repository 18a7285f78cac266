//! chargegraph: find coverage gaps between charging facilities and suggest
//! where to put the next one.
//!
//! Loads a facility CSV, builds a proximity graph over one region, finds the
//! facility farthest (by shortest path) from the current source, and places
//! a new facility halfway to it.
//!
//! ```text
//! chargegraph stations.csv regions
//! chargegraph stations.csv farthest --region "New York" --engine bellman-ford
//! chargegraph --threshold 5 stations.csv place --region CA --rounds 3
//! chargegraph stations.csv interactive
//! ```

mod menu;


use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use cg_graph::EngineKind;
use cg_ingest::RecordLayout;
use cg_session::{DEFAULT_THRESHOLD_KM, Session, SessionConfig};

#[derive(Parser)]
#[command(name = "chargegraph", version, about)]
struct Cli {
    /// Facility CSV (header row; id, state, latitude and longitude columns).
    csv: PathBuf,

    /// Link two facilities when they are at most this many kilometres apart.
    #[arg(short, long, value_name = "KM", default_value_t = DEFAULT_THRESHOLD_KM)]
    threshold: f64,

    /// Shortest-path engine: "dijkstra" or "bellman-ford".
    #[arg(short, long, default_value_t = EngineKind::Dijkstra)]
    engine: EngineKind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// List regions and their facility counts.
    Regions,

    /// Report the facility farthest from the current source.
    Farthest {
        #[arg(short, long)]
        region: String,

        /// Also run the other engine and check the two agree.
        #[arg(short, long)]
        compare: bool,
    },

    /// Place new facilities, one per round.
    Place {
        #[arg(short, long)]
        region: String,

        #[arg(short = 'n', long, default_value_t = 1)]
        rounds: usize,
    },

    /// Menu-driven session on stdin.
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SessionConfig { threshold_km: cli.threshold, engine: cli.engine };
    let (mut session, report) = Session::load_csv(&cli.csv, &RecordLayout::default(), config)
        .with_context(|| format!("loading {}", cli.csv.display()))?;
    info!("{report}");

    match cli.command {
        Commands::Regions => {
            for (region, count) in session.store().regions() {
                println!("{region}\t{count}");
            }
        }
        Commands::Farthest { region, compare } => {
            session.select_region(&region)?;
            let ecc = session.farthest_default()?;
            println!("{}", menu::describe_eccentricity(&session, &ecc));
            if compare {
                let cmp = session.compare_engines()?;
                println!("engines agree: {}", cmp.agree);
            }
        }
        Commands::Place { region, rounds } => {
            session.select_region(&region)?;
            for round in 1..=rounds {
                let placed = session
                    .place_new_facility(cli.engine)
                    .with_context(|| format!("placement round {round}"))?;
                println!("{round}: {placed}");
            }
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            menu::run(&mut session, stdin.lock(), io::stdout())?;
        }
    }
    Ok(())
}
