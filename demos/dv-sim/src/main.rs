use std::fmt::Display;
use std::path::PathBuf;

use clap::Parser;
use dvr::framework::{ProtocolParams, RoutingSystem};
use dvr::{Simulation, SimulationReport, Topology};
use log::info;
use simplelog::*;

use crate::config::{Network, SimConfig};
use crate::report::TablePrinter;

mod config;
mod report;
mod system;

#[derive(Parser)]
#[command(name = "dv-sim")]
#[command(about = "Simulates distance-vector routing until the tables converge", long_about = None)]
#[command(version)]
struct Args {
    /// JSON topology, runs the built-in lab network when omitted
    config: Option<PathBuf>,
    /// Override the round limit
    #[arg(short, long)]
    max_rounds: Option<usize>,
    /// Print the tables after every round
    #[arg(short, long)]
    every_round: bool,
    /// Print the final report as JSON instead of tables
    #[arg(long)]
    json: bool,
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    CombinedLogger::init(vec![TermLogger::new(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => {
            info!("No config given, using the built-in lab network");
            SimConfig::builtin()
        }
    };

    match config.network()? {
        Network::Indexed(topology) => simulate(&args, &config, topology),
        Network::Named(topology) => simulate(&args, &config, topology),
    }
}

fn simulate<T: RoutingSystem>(
    args: &Args,
    config: &SimConfig,
    topology: Topology<T>,
) -> anyhow::Result<()>
where
    T::NodeAddress: Display,
{
    let mut params: ProtocolParams = config.params(T::config());
    if args.max_rounds.is_some() {
        params.max_rounds = args.max_rounds;
    }
    info!(
        "Simulating {} routers, {} links, round limit {}",
        topology.node_count(),
        topology.links().len(),
        params.round_limit(topology.node_count())
    );

    let mut sim = Simulation::with_params(&topology, params);
    if args.json {
        let outcome = sim.run();
        let report = SimulationReport {
            tables: sim.tables(),
            outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        sim.run_with(&mut TablePrinter {
            every_round: args.every_round,
        });
    }
    Ok(())
}
