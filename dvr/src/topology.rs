use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use educe::Educe;
use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::link::Link;
use crate::concepts::neighbour::Neighbour;
use crate::feedback::RoutingWarning;
use crate::framework::{Metric, RoutingSystem};

/// The static network: every node and its direct neighbours. Immutable once built.
#[cfg_attr(feature = "serde", serde_with::serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Topology<T: RoutingSystem + ?Sized> {
    nodes: BTreeSet<T::NodeAddress>,
    /// node -> (neighbour -> link cost), symmetric
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, Vec<(_, _)>)>"))]
    adjacency: BTreeMap<T::NodeAddress, BTreeMap<T::NodeAddress, Metric>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    warnings: Vec<RoutingWarning<T>>,
}

impl<T: RoutingSystem + ?Sized> Topology<T> {
    /// Builds the topology from a node list and undirected links.
    /// Bad links are dropped or adjusted and reported as warnings, never as errors.
    pub fn build(
        nodes: impl IntoIterator<Item = T::NodeAddress>,
        links: impl IntoIterator<Item = Link<T>>,
    ) -> Self {
        let mut topology = Self {
            nodes: BTreeSet::new(),
            adjacency: BTreeMap::new(),
            warnings: Vec::new(),
        };

        for node in nodes {
            if topology.nodes.contains(&node) {
                topology.warn(RoutingWarning::DuplicateNode { node });
                continue;
            }
            topology.adjacency.insert(node.clone(), BTreeMap::new());
            topology.nodes.insert(node);
        }

        for link in links {
            topology.add_link(link);
        }
        topology
    }

    fn add_link(&mut self, link: Link<T>) {
        let Link { a, b, mut cost } = link;
        let missing = [&a, &b]
            .into_iter()
            .find(|end| !self.nodes.contains(*end))
            .cloned();
        if let Some(missing) = missing {
            self.warn(RoutingWarning::UnknownNode { a, b, missing });
            return;
        }
        if a == b {
            self.warn(RoutingWarning::SelfLink { node: a });
            return;
        }
        if cost == 0 {
            self.warn(RoutingWarning::MetricIsZero { a: a.clone(), b: b.clone() });
            cost = 1;
        }

        let kept = match self.adjacency.entry(a.clone()).or_default().entry(b.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(cost);
                None
            }
            Entry::Occupied(mut slot) => {
                let kept = cost.min(*slot.get());
                slot.insert(kept);
                Some(kept)
            }
        };
        self.adjacency.entry(b.clone()).or_default().insert(a.clone(), kept.unwrap_or(cost));
        if let Some(kept) = kept {
            self.warn(RoutingWarning::DuplicateLink { a, b, kept });
        }
    }

    fn warn(&mut self, warning: RoutingWarning<T>) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    /// All nodes, in address order
    pub fn nodes(&self) -> impl Iterator<Item = &T::NodeAddress> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, node: &T::NodeAddress) -> bool {
        self.nodes.contains(node)
    }

    /// Direct neighbours of `node` with their link cost, in address order.
    /// Empty for unknown nodes.
    pub fn neighbours(&self, node: &T::NodeAddress) -> impl Iterator<Item = Neighbour<T>> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neigh| neigh.iter())
            .map(|(addr, cost)| Neighbour::new(addr.clone(), *cost))
    }

    pub fn link_cost(&self, a: &T::NodeAddress, b: &T::NodeAddress) -> Option<Metric> {
        self.adjacency.get(a).and_then(|neigh| neigh.get(b)).copied()
    }

    /// Every link once, endpoints ordered low to high
    pub fn links(&self) -> Vec<Link<T>> {
        self.adjacency
            .iter()
            .flat_map(|(a, neigh)| {
                neigh
                    .iter()
                    .filter(move |(b, _)| a < *b)
                    .map(move |(b, cost)| Link::new(a.clone(), b.clone(), *cost))
            })
            .collect()
    }

    /// Problems found while building, in input order
    pub fn warnings(&self) -> &[RoutingWarning<T>] {
        &self.warnings
    }
}

/// Shorthand for [`Topology::build`]
pub fn build_topology<T: RoutingSystem + ?Sized>(
    nodes: impl IntoIterator<Item = T::NodeAddress>,
    links: impl IntoIterator<Item = Link<T>>,
) -> Topology<T> {
    Topology::build(nodes, links)
}
