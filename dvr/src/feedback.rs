use educe::Educe;
use thiserror::Error;
use crate::framework::{Metric, RoutingSystem};

/// Although this is an error enum, these should be treated as warnings.
/// None of them abort a run, the offending input is dropped or adjusted.
#[derive(Error)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
pub enum RoutingWarning<T: RoutingSystem + ?Sized> {
    /// The node was listed more than once, the duplicate is ignored.
    #[error("node {node:?} is listed more than once")]
    DuplicateNode {
        node: T::NodeAddress
    },
    /// The link references a node that is not part of the topology, the link is dropped.
    #[error("invalid link {a:?} - {b:?}: {missing:?} is not a known node")]
    UnknownNode {
        a: T::NodeAddress,
        b: T::NodeAddress,
        missing: T::NodeAddress
    },
    /// A node cannot be linked to itself, the link is dropped.
    #[error("link from {node:?} to itself is ignored")]
    SelfLink {
        node: T::NodeAddress
    },
    /// The metric over a link should never be zero (this may result in routing loops!)
    /// The metric is raised to 1.
    #[error("link {a:?} - {b:?} has a zero cost, using 1")]
    MetricIsZero {
        a: T::NodeAddress,
        b: T::NodeAddress
    },
    /// The pair is already linked, only the lowest cost is kept.
    #[error("link {a:?} - {b:?} is defined more than once, keeping cost {kept}")]
    DuplicateLink {
        a: T::NodeAddress,
        b: T::NodeAddress,
        kept: Metric
    },
}
