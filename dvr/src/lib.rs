//! An I/O free distance-vector routing convergence engine.
//!
//! Routers only know their direct neighbours and link costs. Each synchronous round every
//! router snapshots its table, hands the snapshot to its neighbours, and relaxes its own
//! table against what it received, until a round passes with no change or the round limit
//! is hit.

pub mod concepts;
pub mod feedback;
pub mod framework;
pub mod router;
pub mod simulation;
pub mod topology;
pub mod util;

pub use concepts::link::Link;
pub use concepts::route::Route;
pub use concepts::table::RoutingTable;
pub use framework::{Metric, ProtocolParams, RoutingSystem};
pub use router::{Router, INF};
pub use simulation::{run_simulation, Outcome, RoundObserver, Simulation, SimulationReport};
pub use topology::{build_topology, Topology};
