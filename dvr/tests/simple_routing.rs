use dvr::{run_simulation, Outcome, Simulation, INF};

mod common;

#[test]
fn lab_network_shortest_costs() {
    let network = common::graphs::lab_network();
    let report = Simulation::new(&network).into_report();
    assert_eq!(report.outcome, Outcome::Converged { round: 2 });

    // at node 0
    let table = &report.tables[&0];
    assert_eq!(table.metric_to(&1), 1);
    assert_eq!(table.next_hop_to(&1), Some(&1));
    assert_eq!(table.metric_to(&2), 2);
    assert_eq!(table.next_hop_to(&2), Some(&1));
    assert_eq!(table.metric_to(&3), 1);
    assert_eq!(table.next_hop_to(&3), Some(&3));
}

#[test]
fn lab_network_slow_link() {
    let network = common::graphs::lab_network_slow_link();
    let report = run_simulation(&network, 10);
    assert_eq!(report.converged_at(), Some(3));

    let table = &report.tables[&0];
    assert_eq!(table.metric_to(&3), 4);
    assert_eq!(table.next_hop_to(&3), Some(&1));
}

#[test]
fn simple_weighted_graph() {
    let network = common::graphs::simple_weighted();
    let report = Simulation::new(&network).into_report();
    assert_eq!(report.converged_at(), Some(3));

    // at node 0
    assert_eq!(report.tables[&0].next_hop_to(&4), Some(&1));
    assert_eq!(report.tables[&0].metric_to(&4), 8);
    assert_eq!(report.tables[&0].next_hop_to(&2), Some(&2));

    // at node 2
    assert_eq!(report.tables[&2].next_hop_to(&3), Some(&0));
    assert_eq!(report.tables[&2].metric_to(&3), 8);
}

#[test]
fn triangle_prefers_two_short_hops() {
    let network = common::graphs::triangle(5);
    let report = Simulation::new(&network).into_report();
    assert_eq!(report.tables[&0].metric_to(&2), 2);
    assert_eq!(report.tables[&0].next_hop_to(&2), Some(&1));
    assert_eq!(report.tables[&2].metric_to(&0), 2);
    assert_eq!(report.tables[&2].next_hop_to(&0), Some(&1));
}

#[test]
fn triangle_long_edge_cost_is_irrelevant() {
    let short = Simulation::new(&common::graphs::triangle(5)).into_report();
    let long = Simulation::new(&common::graphs::triangle(50)).into_report();
    for node in 0..3 {
        assert_eq!(short.tables[&node].metric_to(&((node + 2) % 3)), long.tables[&node].metric_to(&((node + 2) % 3)));
    }
    assert_eq!(long.tables[&0].metric_to(&2), 2);
    assert_eq!(long.tables[&0].next_hop_to(&2), Some(&1));
}

#[test]
fn matches_reference_shortest_paths() {
    for network in [
        common::graphs::lab_network(),
        common::graphs::lab_network_slow_link(),
        common::graphs::simple_weighted(),
        common::graphs::mesh(),
        common::graphs::line(7),
        common::graphs::with_island(),
    ] {
        let expected = common::reference::all_pairs(&network);
        let report = run_simulation(&network, 100);
        assert!(report.converged_at().is_some());
        for ((from, to), metric) in expected {
            assert_eq!(
                report.tables[&from].metric_to(&to),
                metric,
                "cost from {from} to {to}"
            );
        }
    }
}

#[test]
fn equal_cost_ties_go_to_lowest_neighbour() {
    // 0 reaches 3 at cost 4 through either 1 or 2
    let report = Simulation::new(&common::graphs::mesh()).into_report();
    assert_eq!(report.tables[&0].metric_to(&3), 4);
    assert_eq!(report.tables[&0].next_hop_to(&3), Some(&1));
}

#[test]
fn rip_chain_hop_limit() {
    let network = common::graphs::rip_chain(20);
    let report = Simulation::new(&network).into_report();
    assert_eq!(report.converged_at(), Some(15));

    let first = &report.tables[&common::graphs::address(1)];
    // self plus the 15 routers within the hop limit, the rest are never learned
    assert_eq!(first.len(), 16);
    assert_eq!(first.metric_to(&common::graphs::address(16)), 15);
    assert_eq!(
        first.next_hop_to(&common::graphs::address(16)),
        Some(&common::graphs::address(2))
    );
    assert!(first.get(&common::graphs::address(17)).is_none());
    assert_eq!(first.metric_to(&common::graphs::address(17)), INF);
}

#[test]
fn tables_are_sorted_by_destination() {
    let report = Simulation::new(&common::graphs::rip_chain(4)).into_report();
    let table = &report.tables[&common::graphs::address(2)];
    let destinations: Vec<&String> = table.entries().map(|route| &route.destination).collect();
    let mut sorted = destinations.clone();
    sorted.sort();
    assert_eq!(destinations, sorted);
    assert_eq!(destinations.len(), 4);
}

#[cfg(feature = "serde")]
#[test]
fn report_freeze_and_restore() {
    let report = Simulation::new(&common::graphs::lab_network()).into_report();
    let frozen = serde_json::to_string(&report).unwrap();
    let restored: dvr::SimulationReport<common::Indexed> = serde_json::from_str(&frozen).unwrap();
    assert_eq!(restored.outcome, report.outcome);
    assert_eq!(restored.tables, report.tables);
}
