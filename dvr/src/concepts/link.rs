use crate::framework::{Metric, RoutingSystem};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use educe::Educe;

/// An undirected link between two nodes
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Link<T: RoutingSystem + ?Sized> {
    pub a: T::NodeAddress,
    pub b: T::NodeAddress,
    pub cost: Metric,
}

impl<T: RoutingSystem + ?Sized> Link<T> {
    pub fn new(a: T::NodeAddress, b: T::NodeAddress, cost: Metric) -> Self {
        Self { a, b, cost }
    }

    /// A hop-count link, as used by RIP
    pub fn unit(a: T::NodeAddress, b: T::NodeAddress) -> Self {
        Self::new(a, b, 1)
    }
}
