use crate::concepts::route::Route;
use crate::concepts::table::RoutingTable;
use crate::framework::{Metric, RoutingSystem};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use educe::Educe;

/// A frozen copy of a router's table, taken at the start of a round and handed
/// unchanged to every neighbour. Later changes to the live table are not visible here.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Advertisement<T: RoutingSystem + ?Sized> {
    table: RoutingTable<T>,
}

impl<T: RoutingSystem + ?Sized> Advertisement<T> {
    pub fn new(table: &RoutingTable<T>) -> Self {
        Self {
            table: table.clone(),
        }
    }

    /// the router that sent this advertisement
    pub fn sender(&self) -> &T::NodeAddress {
        self.table.owner()
    }

    pub fn get(&self, destination: &T::NodeAddress) -> Option<&Route<T>> {
        self.table.get(destination)
    }

    pub fn metric_to(&self, destination: &T::NodeAddress) -> Metric {
        self.table.metric_to(destination)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<T>> {
        self.table.entries()
    }
}
