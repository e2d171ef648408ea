//! nsfnet — dynamic RSA simulation on the 14-node NSFNET topology.
//!
//! Offers Poisson traffic to the network, routes every demand with the
//! generic label search (optionally cross-checked against the alternative
//! algorithms), and prints the end-of-run statistics report.
//!
//! ```text
//! cargo run --release -- --units 320 --offered-load 0.4 --seed 1
//! cargo run --release -- --net my_topology.dot --brute-force --yen-ksp
//! ```

use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eon_net::{Graph, is_connected, load_dot, parse_dot, survey_shortest_paths, total_capacity};
use eon_routing::{AdaptiveUnits, Algorithm, Routing, RoutingConfig, SpectrumSelection};
use eon_sim::{Sim, SimConfig, Traffic, TrafficConfig, mean_arrival_for_load};
use eon_stats::{StatsCollector, write_samples};

/// The NSFNET T1 backbone: 14 nodes, 21 fiber links, weights in km.
const NSFNET_DOT: &str = include_str!("nsfnet.dot");

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Dynamic routing and spectrum assignment simulation")]
struct Args {
    /// Topology file (Graphviz); the built-in NSFNET when omitted.
    #[arg(long)]
    net: Option<PathBuf>,

    /// Spectrum units per link.
    #[arg(long, default_value_t = 320)]
    units: u32,

    /// Offered network load.
    #[arg(long, default_value_t = 0.25)]
    offered_load: f64,

    /// Mean connection holding time.
    #[arg(long, default_value_t = 10.0)]
    mht: f64,

    /// Mean requested unit count (Poisson + 1).
    #[arg(long, default_value_t = 2.0)]
    mnu: f64,

    /// RNG seed.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Name of this run in the report.
    #[arg(long, default_value = "nsfnet")]
    population: String,

    /// Spectrum selection policy (first, fittest, random).
    #[arg(long, default_value = "first")]
    spectrum_selection: String,

    /// Cap Yen's enumeration at K paths.
    #[arg(long)]
    k: Option<u32>,

    /// Cap path length at this multiple of the longest shortest path.
    #[arg(long)]
    max_len_coeff: Option<f64>,

    /// Cross-check with the per-slot parallel search.
    #[arg(long)]
    parallel: bool,

    /// Cross-check with exhaustive path enumeration.
    #[arg(long)]
    brute_force: bool,

    /// Cross-check with Yen KSP + spectrum selection.
    #[arg(long)]
    yen_ksp: bool,

    /// Write the sampled time series to this CSV file.
    #[arg(long)]
    samples_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    // ── Network ───────────────────────────────────────────────────────────
    let mut graph: Graph = match &args.net {
        Some(path) => load_dot(path).with_context(|| format!("loading {}", path.display()))?,
        None => parse_dot(NSFNET_DOT).context("parsing the built-in NSFNET topology")?,
    };
    if !is_connected(&graph) {
        bail!("the topology is not connected");
    }
    graph.set_units(args.units);

    let survey = survey_shortest_paths(&graph)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        diameter = survey.max_length,
        mean_hops = survey.mean_hops,
        "network loaded"
    );

    // The table reaches 1.5× past the diameter so the longest demands sit in
    // a defined modulation bucket rather than right on the edge.
    let adaptive = AdaptiveUnits::new(1.5 * survey.max_length);

    // ── Routing ───────────────────────────────────────────────────────────
    let selection: SpectrumSelection = args
        .spectrum_selection
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let mut cross_check = BTreeSet::new();
    if args.parallel {
        cross_check.insert(Algorithm::Parallel);
    }
    if args.brute_force {
        cross_check.insert(Algorithm::BruteForce);
    }
    if args.yen_ksp {
        cross_check.insert(Algorithm::YenKsp);
    }

    let routing = Routing::new(
        adaptive,
        RoutingConfig {
            selection,
            k: args.k,
            max_len: args.max_len_coeff.map(|c| c * survey.max_length),
            cross_check,
        },
    )?;

    // ── Traffic ───────────────────────────────────────────────────────────
    let mean_arrival = mean_arrival_for_load(
        survey.mean_hops,
        args.mht,
        args.mnu,
        args.offered_load,
        total_capacity(&graph),
    );
    let traffic = Traffic::new(TrafficConfig {
        mean_arrival,
        mean_holding: args.mht,
        mean_units: args.mnu,
    })?;
    info!(mean_arrival, offered_load = args.offered_load, "traffic calibrated");

    // ── Run ───────────────────────────────────────────────────────────────
    let config = SimConfig {
        seed: args.seed,
        sim_time: 10.0 * args.mht,
        kickoff: 0.0,
        samples: 100,
    };
    let mut collector = StatsCollector::new(config.kickoff);
    let mut sim = Sim::new(config, graph, routing, traffic)?;
    sim.run(&mut collector)?;

    // ── Report ────────────────────────────────────────────────────────────
    let stdout = std::io::stdout();
    collector.write_report(&args.population, &mut stdout.lock())?;
    std::io::stdout().flush()?;

    if let Some(path) = &args.samples_csv {
        write_samples(path, collector.samples())
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
