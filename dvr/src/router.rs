use crate::concepts::advertisement::Advertisement;
use crate::concepts::neighbour::Neighbour;
use crate::concepts::route::Route;
use crate::concepts::table::RoutingTable;
use crate::framework::{Metric, ProtocolParams, RoutingSystem};
use crate::topology::Topology;
use crate::util::sum_inf;
use educe::Educe;
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const INF: Metric = Metric::MAX;

#[cfg_attr(feature = "serde", serde_with::serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Router<T: RoutingSystem + ?Sized> {
    pub address: T::NodeAddress,
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, _)>"))]
    pub neighbours: BTreeMap<T::NodeAddress, Neighbour<T>>,
    routes: RoutingTable<T>,
    params: ProtocolParams,
}

impl<T: RoutingSystem + ?Sized> Router<T> {
    /// A router that only knows the route to itself
    pub fn new(address: T::NodeAddress, params: ProtocolParams) -> Self {
        Self {
            routes: RoutingTable::new(address.clone()),
            address,
            neighbours: BTreeMap::new(),
            params,
        }
    }

    /// Resets the table to the self-route plus one direct route per neighbour.
    /// With `seed_unreachable`, every other node starts out as INF.
    pub fn seed(&mut self, topology: &Topology<T>) {
        self.routes = RoutingTable::new(self.address.clone());
        self.neighbours = topology
            .neighbours(&self.address)
            .map(|neigh| (neigh.addr.clone(), neigh))
            .collect();

        if self.params.seed_unreachable {
            for node in topology.nodes() {
                if *node != self.address {
                    self.routes.insert(Route::unreachable(node.clone()));
                }
            }
        }
        for (addr, neigh) in &self.neighbours {
            let metric = sum_inf(neigh.link_cost, 0, self.params.max_metric);
            if metric != INF || self.params.seed_unreachable {
                self.routes.insert(Route::via(addr.clone(), metric, addr.clone()));
            }
        }
    }

    /// Snapshot of the current table, safe to hand to neighbours while this router keeps updating
    pub fn advertise(&self) -> Advertisement<T> {
        Advertisement::new(&self.routes)
    }

    /// Relaxes the table against one neighbour's advertisement, returns whether any route changed.
    ///
    /// For every destination either side knows of:
    /// - the candidate is link cost + advertised cost, saturating to INF
    /// - if the neighbour routes that destination through us, its advertisement is ignored
    /// - a strictly cheaper candidate replaces the current route
    /// - if the current route already goes through this neighbour, any change in cost is taken as is
    pub fn relax(&mut self, neighbour: &T::NodeAddress, advert: &Advertisement<T>) -> bool {
        let Some(link_cost) = self.neighbours.get(neighbour).map(|neigh| neigh.link_cost) else {
            return false;
        };

        let destinations: BTreeSet<T::NodeAddress> = advert
            .routes()
            .map(|route| route.destination.clone())
            .chain(self.routes.destinations().cloned())
            .collect();

        let mut changed = false;
        for dest in destinations {
            if dest == self.address {
                continue; // the self-route is never replaced
            }

            let (adv_metric, adv_next_hop) = match advert.get(&dest) {
                Some(route) => (route.metric, route.next_hop.as_ref()),
                None => (INF, None),
            };
            if adv_next_hop == Some(&self.address) {
                continue; // split horizon, the neighbour is relaying our own path back to us
            }

            let metric = sum_inf(link_cost, adv_metric, self.params.max_metric);
            let (cur_metric, via_neighbour) = match self.routes.get(&dest) {
                Some(route) => (route.metric, route.next_hop.as_ref() == Some(neighbour)),
                None => (INF, false),
            };

            if metric < cur_metric || (via_neighbour && metric != cur_metric) {
                trace!(
                    "{:?}: route to {:?} via {:?} {} -> {}",
                    self.address, dest, neighbour, cur_metric, metric
                );
                self.routes.insert(Route::via(dest, metric, neighbour.clone()));
                changed = true;
            }
        }
        changed
    }

    pub fn routes(&self) -> &RoutingTable<T> {
        &self.routes
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }
}
