use dvr::{Link, Topology};

use crate::common::{Addressed, Indexed};

pub fn indexed(nodes: u32, links: &[(u32, u32, u32)]) -> Topology<Indexed> {
    Topology::build(
        0..nodes,
        links.iter().map(|(a, b, cost)| Link::new(*a, *b, *cost)),
    )
}

/// 0-1:1, 0-2:3, 0-3:1, 1-2:1, 2-3:2
pub fn lab_network() -> Topology<Indexed> {
    indexed(4, &[(0, 1, 1), (0, 2, 3), (0, 3, 1), (1, 2, 1), (2, 3, 2)])
}

/// the same network before the 0-3 link was cheapened
pub fn lab_network_slow_link() -> Topology<Indexed> {
    indexed(4, &[(0, 1, 1), (0, 2, 3), (0, 3, 7), (1, 2, 1), (2, 3, 2)])
}

pub fn triangle(long_edge: u32) -> Topology<Indexed> {
    indexed(3, &[(0, 1, 1), (1, 2, 1), (0, 2, long_edge)])
}

/// node 3 has no links at all
pub fn with_island() -> Topology<Indexed> {
    indexed(4, &[(0, 1, 1), (1, 2, 1), (0, 2, 4)])
}

pub fn line(nodes: u32) -> Topology<Indexed> {
    let links: Vec<_> = (1..nodes).map(|i| (i - 1, i, 1)).collect();
    indexed(nodes, &links)
}

pub fn simple_weighted() -> Topology<Indexed> {
    indexed(
        5,
        &[
            (0, 1, 2),
            (0, 2, 1),
            (1, 2, 4),
            (1, 3, 5),
            (2, 3, 100),
            (2, 4, 8),
            (3, 4, 1),
        ],
    )
}

/// a denser graph with several equal cost paths
pub fn mesh() -> Topology<Indexed> {
    indexed(
        8,
        &[
            (0, 1, 3),
            (0, 2, 1),
            (1, 3, 1),
            (2, 3, 3),
            (2, 4, 7),
            (3, 5, 2),
            (4, 5, 1),
            (4, 6, 2),
            (5, 7, 6),
            (6, 7, 1),
            (1, 6, 9),
        ],
    )
}

pub fn address(i: usize) -> String {
    format!("10.0.0.{i}")
}

/// routers 10.0.0.1 .. 10.0.0.n chained with hop-count links
pub fn rip_chain(n: usize) -> Topology<Addressed> {
    Topology::build(
        (1..=n).map(address),
        (1..n).map(|i| Link::unit(address(i), address(i + 1))),
    )
}
