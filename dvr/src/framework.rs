use std::fmt::Debug;
use std::hash::Hash;

use cfg_if::cfg_if;

use crate::router::INF;

pub type Metric = u32;

pub trait RoutingSystem {
    /// Address of the node on the routing network, MUST be unique within a topology
    type NodeAddress: Ord + Debug + RootData + RootKey;
    fn config() -> ProtocolParams {
        Default::default()
    }
}

cfg_if! {
    if #[cfg(feature = "serde")] {
        use serde::de::DeserializeOwned;
        use serde::Serialize;

        pub trait RootData: Clone + Serialize + DeserializeOwned + Sized {}
        impl<T: Clone + Serialize + DeserializeOwned + Sized> RootData for T {}
    } else {
        pub trait RootData: Clone + Sized {}
        impl<T: Clone + Sized> RootData for T {}
    }
}

pub trait RootKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> RootKey for T {}

/// Engine parameters, fixed for the duration of a run
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolParams {
    /// Any computed cost at or above this value is treated as INF.
    /// RIP uses 16, the default only saturates on overflow.
    pub max_metric: Metric,
    /// Seed every node of the topology as an unreachable route up front,
    /// otherwise destinations appear as they are learned
    pub seed_unreachable: bool,
    /// Round cap, derived from the node count when unset
    pub max_rounds: Option<usize>,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            max_metric: INF,
            seed_unreachable: true,
            max_rounds: None,
        }
    }
}

impl ProtocolParams {
    /// RIP style parameters: hop count metric with 16 as infinity, routes learned incrementally
    pub fn rip() -> Self {
        Self {
            max_metric: 16,
            seed_unreachable: false,
            max_rounds: None,
        }
    }

    pub fn round_limit(&self, node_count: usize) -> usize {
        self.max_rounds
            .unwrap_or_else(|| crate::util::default_round_limit(node_count))
    }
}
