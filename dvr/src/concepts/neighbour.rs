use crate::framework::{Metric, RoutingSystem};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use educe::Educe;

#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Neighbour<T: RoutingSystem + ?Sized> {
    /// the routing network address
    pub addr: T::NodeAddress,
    /// Direct link-cost to this neighbour, always > 0. Lower is better.
    pub link_cost: Metric,
}

impl<T: RoutingSystem + ?Sized> Neighbour<T> {
    pub fn new(addr: T::NodeAddress, link_cost: Metric) -> Self {
        Self { addr, link_cost }
    }
}
