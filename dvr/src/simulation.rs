use std::collections::BTreeMap;

use educe::Educe;
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::advertisement::Advertisement;
use crate::concepts::table::RoutingTable;
use crate::framework::{ProtocolParams, RoutingSystem};
use crate::router::Router;
use crate::topology::Topology;

/// How a run ended. Hitting the round limit is a normal outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// the given round changed no table
    Converged { round: usize },
    /// tables were still changing when the limit was hit
    RoundLimitReached { rounds: usize },
}

impl Outcome {
    pub fn converged_at(&self) -> Option<usize> {
        match self {
            Outcome::Converged { round } => Some(*round),
            Outcome::RoundLimitReached { .. } => None,
        }
    }

    /// number of rounds that were run
    pub fn rounds(&self) -> usize {
        match self {
            Outcome::Converged { round } => *round,
            Outcome::RoundLimitReached { rounds } => *rounds,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Finished(Outcome),
}

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// 1-based
    pub round: usize,
    pub changed: bool,
}

/// Hooks for whoever renders the run, every method defaults to doing nothing
pub trait RoundObserver<T: RoutingSystem + ?Sized> {
    /// called once, before the first round
    fn seeded(&mut self, _sim: &Simulation<T>) {}
    fn round_completed(&mut self, _round: &RoundOutcome, _sim: &Simulation<T>) {}
    fn finished(&mut self, _outcome: &Outcome, _sim: &Simulation<T>) {}
}

impl<T: RoutingSystem + ?Sized> RoundObserver<T> for () {}

/// Final tables of a run together with how it ended
#[cfg_attr(feature = "serde", serde_with::serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct SimulationReport<T: RoutingSystem + ?Sized> {
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, _)>"))]
    pub tables: BTreeMap<T::NodeAddress, RoutingTable<T>>,
    pub outcome: Outcome,
}

impl<T: RoutingSystem + ?Sized> SimulationReport<T> {
    pub fn converged_at(&self) -> Option<usize> {
        self.outcome.converged_at()
    }
}

/// Owns every router of a run and drives the synchronous rounds.
///
/// Each round first takes an advertisement from every router, and only then lets
/// routers relax against their neighbours' advertisements, so every update in round N
/// is computed from round N-1 state.
pub struct Simulation<T: RoutingSystem + ?Sized> {
    routers: BTreeMap<T::NodeAddress, Router<T>>,
    round: usize,
    round_limit: usize,
    state: SimulationState,
}

impl<T: RoutingSystem + ?Sized> Simulation<T> {
    pub fn new(topology: &Topology<T>) -> Self {
        Self::with_params(topology, T::config())
    }

    pub fn with_params(topology: &Topology<T>, params: ProtocolParams) -> Self {
        let round_limit = params.round_limit(topology.node_count());
        let routers = topology
            .nodes()
            .map(|addr| {
                let mut router = Router::new(addr.clone(), params.clone());
                router.seed(topology);
                (addr.clone(), router)
            })
            .collect();

        let state = if round_limit == 0 {
            SimulationState::Finished(Outcome::RoundLimitReached { rounds: 0 })
        } else {
            SimulationState::Running
        };
        Self {
            routers,
            round: 0,
            round_limit,
            state,
        }
    }

    /// Runs one round. Returns None once the simulation has finished.
    pub fn step(&mut self) -> Option<RoundOutcome> {
        if self.state != SimulationState::Running {
            return None;
        }
        self.round += 1;

        // every snapshot is taken before any router changes
        let adverts: BTreeMap<T::NodeAddress, Advertisement<T>> = self
            .routers
            .iter()
            .map(|(addr, router)| (addr.clone(), router.advertise()))
            .collect();

        let mut changed = false;
        for router in self.routers.values_mut() {
            let neighbours: Vec<T::NodeAddress> = router.neighbours.keys().cloned().collect();
            for neigh in neighbours {
                if let Some(advert) = adverts.get(&neigh) {
                    changed |= router.relax(&neigh, advert);
                }
            }
        }
        debug!("round {}: changed = {}", self.round, changed);

        if !changed {
            self.finish(Outcome::Converged { round: self.round });
        } else if self.round >= self.round_limit {
            self.finish(Outcome::RoundLimitReached { rounds: self.round });
        }
        Some(RoundOutcome {
            round: self.round,
            changed,
        })
    }

    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Converged { round } => info!("converged after {round} round(s)"),
            Outcome::RoundLimitReached { rounds } => {
                info!("round limit {rounds} reached without convergence")
            }
        }
        self.state = SimulationState::Finished(outcome);
    }

    /// Runs rounds until convergence or the round limit
    pub fn run(&mut self) -> Outcome {
        self.run_with(&mut ())
    }

    pub fn run_with(&mut self, observer: &mut impl RoundObserver<T>) -> Outcome {
        observer.seeded(self);
        while let Some(round) = self.step() {
            observer.round_completed(&round, self);
        }
        let outcome = self.outcome().unwrap_or(Outcome::RoundLimitReached { rounds: self.round });
        observer.finished(&outcome, self);
        outcome
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SimulationState::Running => None,
            SimulationState::Finished(outcome) => Some(outcome),
        }
    }

    /// rounds run so far
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn round_limit(&self) -> usize {
        self.round_limit
    }

    pub fn router(&self, addr: &T::NodeAddress) -> Option<&Router<T>> {
        self.routers.get(addr)
    }

    /// Every router, in address order
    pub fn routers(&self) -> impl Iterator<Item = &Router<T>> {
        self.routers.values()
    }

    /// Copies of every table, keyed by owner
    pub fn tables(&self) -> BTreeMap<T::NodeAddress, RoutingTable<T>> {
        self.routers
            .iter()
            .map(|(addr, router)| (addr.clone(), router.routes().clone()))
            .collect()
    }

    /// Runs to completion and hands back the final tables
    pub fn into_report(mut self) -> SimulationReport<T> {
        let outcome = self.run();
        SimulationReport {
            tables: self.tables(),
            outcome,
        }
    }
}

/// Builds a simulation with the system's default parameters and the given round cap,
/// and runs it to completion.
pub fn run_simulation<T: RoutingSystem + ?Sized>(
    topology: &Topology<T>,
    max_rounds: usize,
) -> SimulationReport<T> {
    let params = ProtocolParams {
        max_rounds: Some(max_rounds),
        ..T::config()
    };
    Simulation::with_params(topology, params).into_report()
}
