#![allow(dead_code)]

pub mod graphs;
pub mod reference;

use dvr::framework::{ProtocolParams, RoutingSystem};

/// Nodes numbered 0..N with weighted links
pub struct Indexed;
impl RoutingSystem for Indexed {
    type NodeAddress = u32;
}

/// Named nodes with hop-count links, RIP style
pub struct Addressed;
impl RoutingSystem for Addressed {
    type NodeAddress = String;
    fn config() -> ProtocolParams {
        ProtocolParams::rip()
    }
}
