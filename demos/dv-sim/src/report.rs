use std::fmt::Display;

use dvr::simulation::RoundOutcome;
use dvr::{Outcome, RoundObserver, RoutingSystem, RoutingTable, Simulation};

/// Prints routing tables to stdout, sorted by destination
pub struct TablePrinter {
    /// print the seeded tables and every round, not only the final state
    pub every_round: bool,
}

impl TablePrinter {
    fn print_all<T: RoutingSystem>(sim: &Simulation<T>, title: &str)
    where
        T::NodeAddress: Display,
    {
        for router in sim.routers() {
            print_table(router.routes(), &format!("{title} {}:", router.address));
        }
    }
}

pub fn print_table<T: RoutingSystem>(table: &RoutingTable<T>, title: &str)
where
    T::NodeAddress: Display,
{
    println!("\n{title}");
    println!("{:<17}{:<17}{:<17}{}", "[Source]", "[Destination]", "[Next Hop]", "[Metric]");
    for route in table.entries() {
        let next_hop = match &route.next_hop {
            Some(hop) => hop.to_string(),
            None => "none".to_string(),
        };
        let metric = if route.is_reachable() {
            route.metric.to_string()
        } else {
            "unreachable".to_string()
        };
        println!(
            "{:<17}{:<17}{:<17}{}",
            table.owner().to_string(),
            route.destination.to_string(),
            next_hop,
            metric
        );
    }
}

impl<T: RoutingSystem> RoundObserver<T> for TablePrinter
where
    T::NodeAddress: Display,
{
    fn seeded(&mut self, sim: &Simulation<T>) {
        if self.every_round {
            println!("Initial state of tables (round 0):");
            Self::print_all(sim, "Router");
        }
    }

    fn round_completed(&mut self, round: &RoundOutcome, sim: &Simulation<T>) {
        if self.every_round {
            println!("\n--- Round {} ---", round.round);
            Self::print_all(sim, "Router");
        }
    }

    fn finished(&mut self, outcome: &Outcome, sim: &Simulation<T>) {
        match outcome {
            Outcome::Converged { round } => {
                println!("\n--- Convergence reached after {round} round(s) ---")
            }
            Outcome::RoundLimitReached { rounds } => {
                println!("\n--- Round limit {rounds} reached ---")
            }
        }
        println!("\n--- Final Routing Tables ---");
        Self::print_all(sim, "Final state of router");
    }
}
