use std::collections::BTreeMap;

use dvr::{Metric, RoutingSystem, Topology, INF};

/// All-pairs shortest paths by Floyd-Warshall, independent of the engine
pub fn all_pairs<T: RoutingSystem>(
    topology: &Topology<T>,
) -> BTreeMap<(T::NodeAddress, T::NodeAddress), Metric> {
    let nodes: Vec<T::NodeAddress> = topology.nodes().cloned().collect();
    let mut dist = BTreeMap::new();
    for a in &nodes {
        for b in &nodes {
            let cost = if a == b {
                0
            } else {
                topology.link_cost(a, b).unwrap_or(INF)
            };
            dist.insert((a.clone(), b.clone()), cost);
        }
    }
    for k in &nodes {
        for i in &nodes {
            for j in &nodes {
                let ik = dist[&(i.clone(), k.clone())];
                let kj = dist[&(k.clone(), j.clone())];
                if ik != INF && kj != INF && ik + kj < dist[&(i.clone(), j.clone())] {
                    dist.insert((i.clone(), j.clone()), ik + kj);
                }
            }
        }
    }
    dist
}
