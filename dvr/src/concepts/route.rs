use crate::framework::{Metric, RoutingSystem};
use crate::router::INF;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use educe::Educe;

#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Route<T: RoutingSystem + ?Sized> {
    /// the destination this route leads to
    pub destination: T::NodeAddress,
    /// total cost to the destination, INF if unreachable
    pub metric: Metric,
    /// the neighbour to forward through, the owner itself for the self-route,
    /// None while the destination is unreachable
    pub next_hop: Option<T::NodeAddress>,
}

impl<T: RoutingSystem + ?Sized> Route<T> {
    pub fn self_route(owner: &T::NodeAddress) -> Self {
        Self {
            destination: owner.clone(),
            metric: 0,
            next_hop: Some(owner.clone()),
        }
    }

    pub fn unreachable(destination: T::NodeAddress) -> Self {
        Self {
            destination,
            metric: INF,
            next_hop: None,
        }
    }

    /// A route through `next_hop`. An INF metric never keeps a next hop.
    pub fn via(destination: T::NodeAddress, metric: Metric, next_hop: T::NodeAddress) -> Self {
        if metric == INF {
            return Self::unreachable(destination);
        }
        Self {
            destination,
            metric,
            next_hop: Some(next_hop),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.metric != INF
    }
}
