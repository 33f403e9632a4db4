use std::collections::BTreeMap;

use crate::concepts::route::Route;
use crate::framework::{Metric, RoutingSystem};
use crate::router::INF;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use educe::Educe;

/// One route per destination, keyed and iterated in destination order
#[cfg_attr(feature = "serde", serde_with::serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct RoutingTable<T: RoutingSystem + ?Sized> {
    owner: T::NodeAddress,
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, _)>"))]
    routes: BTreeMap<T::NodeAddress, Route<T>>,
}

impl<T: RoutingSystem + ?Sized> RoutingTable<T> {
    /// A table holding only the self-route of `owner`
    pub fn new(owner: T::NodeAddress) -> Self {
        let mut routes = BTreeMap::new();
        routes.insert(owner.clone(), Route::self_route(&owner));
        Self { owner, routes }
    }

    pub fn owner(&self) -> &T::NodeAddress {
        &self.owner
    }

    pub fn get(&self, destination: &T::NodeAddress) -> Option<&Route<T>> {
        self.routes.get(destination)
    }

    /// Cost to `destination`, INF when no route is known
    pub fn metric_to(&self, destination: &T::NodeAddress) -> Metric {
        self.routes.get(destination).map_or(INF, |route| route.metric)
    }

    pub fn next_hop_to(&self, destination: &T::NodeAddress) -> Option<&T::NodeAddress> {
        self.routes
            .get(destination)
            .and_then(|route| route.next_hop.as_ref())
    }

    /// Routes sorted by destination
    pub fn entries(&self) -> impl Iterator<Item = &Route<T>> {
        self.routes.values()
    }

    pub fn destinations(&self) -> impl Iterator<Item = &T::NodeAddress> {
        self.routes.keys()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Only the owning router writes to its table
    pub(crate) fn insert(&mut self, route: Route<T>) {
        self.routes.insert(route.destination.clone(), route);
    }
}
