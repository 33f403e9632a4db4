use dvr::framework::{ProtocolParams, RoutingSystem};

/// Routers numbered 0..N with weighted links
pub struct IndexedSystem {}
impl RoutingSystem for IndexedSystem {
    type NodeAddress = u32;
}

/// Routers named by address, hop count metric like RIP
pub struct AddressSystem {}
impl RoutingSystem for AddressSystem {
    type NodeAddress = String;
    fn config() -> ProtocolParams {
        ProtocolParams::rip()
    }
}
