//! Route enumeration.
//!
//! Stop sequences are found with a FIFO search over the directed
//! connections. Every sequence reaching the destination is kept, and each
//! one is then checked against the bus lines: every hop needs at least one
//! bus serving both of its stops.

use std::collections::BTreeSet;
use std::fmt;

use pathlab_paths::{FifoFrontier, Frontier, NodeArena, NodeId, SearchNode};

use crate::error::TransitError;
use crate::network::{BusId, Network, StopId};

/// One hop of a route and the buses that serve both of its stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub from: StopId,
    pub to: StopId,
    pub buses: BTreeSet<BusId>,
}

/// A rideable stop sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<StopId>,
    legs: Vec<Leg>,
    boarding: BTreeSet<BusId>,
}

impl Route {
    /// Stops from start to destination.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Buses to board at the first stop.
    pub fn boarding(&self) -> &BTreeSet<BusId> {
        &self.boarding
    }

    /// Render the route with stop and bus names from `network`.
    pub fn display<'a>(&'a self, network: &'a Network) -> RouteDisplay<'a> {
        RouteDisplay {
            route: self,
            network,
        }
    }
}

/// Helper returned by [`Route::display`].
pub struct RouteDisplay<'a> {
    route: &'a Route,
    network: &'a Network,
}

impl fmt::Display for RouteDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let net = self.network;
        let Some(&first) = self.route.stops.first() else {
            return Ok(());
        };
        f.write_str(net.stop_name(first))?;
        for leg in &self.route.legs {
            let buses: Vec<&str> = leg.buses.iter().map(|&b| net.bus_name(b)).collect();
            write!(f, " -[{}]-> {}", buses.join(", "), net.stop_name(leg.to))?;
        }
        Ok(())
    }
}

impl Network {
    /// Every rideable route from `start` to `end`, in discovery order.
    ///
    /// A stop already on a partial route is not revisited, so cyclic
    /// networks terminate. Sequences with a hop no bus covers are dropped.
    pub fn build_routes(&self, start: StopId, end: StopId) -> Result<Vec<Route>, TransitError> {
        self.check_stop(start)?;
        self.check_stop(end)?;

        let (arena, found) = self.stop_sequences(start, end)?;
        let routes: Vec<Route> = found
            .into_iter()
            .filter_map(|id| self.ride(arena.trace(id)))
            .collect();
        log::debug!(
            "transit: {} of {} sequences from {} to {} are rideable",
            routes.len(),
            arena.len(),
            self.stop_name(start),
            self.stop_name(end)
        );
        Ok(routes)
    }

    /// Same as [`build_routes`](Self::build_routes), with stops given by name.
    pub fn build_routes_by_name(&self, start: &str, end: &str) -> Result<Vec<Route>, TransitError> {
        self.build_routes(self.stop_id(start)?, self.stop_id(end)?)
    }

    fn stop_sequences(
        &self,
        start: StopId,
        end: StopId,
    ) -> Result<(NodeArena<StopId>, Vec<NodeId>), TransitError> {
        let mut arena = NodeArena::new();
        let mut frontier = FifoFrontier::new();
        let mut found = Vec::new();

        let root = arena.push(SearchNode::root(start, None));
        frontier.push(root, arena.get(root));

        while let Some(id) = frontier.pop() {
            let current = arena.get(id).pos;
            if current == end {
                found.push(id);
                continue;
            }
            for &next in self.stop(current)?.next() {
                if arena.ancestors(id).any(|n| n.pos == next) {
                    continue;
                }
                let child = arena.push(SearchNode::child(next, id, None));
                frontier.push(child, arena.get(child));
            }
        }
        Ok((arena, found))
    }

    /// Attach buses to a stop sequence, or `None` when some hop has none.
    fn ride(&self, stops: Vec<StopId>) -> Option<Route> {
        let mut legs = Vec::with_capacity(stops.len().saturating_sub(1));
        for pair in stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let buses: BTreeSet<BusId> = self
                .buses_at(from)
                .intersection(&self.buses_at(to))
                .copied()
                .collect();
            if buses.is_empty() {
                log::debug!(
                    "transit: no bus from {} to {}, dropping sequence",
                    self.stop_name(from),
                    self.stop_name(to)
                );
                return None;
            }
            legs.push(Leg { from, to, buses });
        }

        let at_start = self.buses_at(stops[0]);
        let boarding = match legs.first() {
            Some(leg) => at_start.intersection(&leg.buses).copied().collect(),
            None => at_start,
        };
        Some(Route {
            stops,
            legs,
            boarding,
        })
    }
}
