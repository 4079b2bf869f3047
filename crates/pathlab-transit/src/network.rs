//! Stops, bus lines and the caller-owned registry that holds them.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::error::TransitError;

/// Index of a stop inside its [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

/// Index of a bus line inside its [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub(crate) usize);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus#{}", self.0)
    }
}

/// A named stop with its outgoing directed connections.
#[derive(Debug, Clone)]
pub struct Stop {
    name: String,
    next: Vec<StopId>,
}

impl Stop {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops reachable in one hop, in the order they were connected.
    pub fn next(&self) -> &[StopId] {
        &self.next
    }
}

/// A bus line: a name and the stops it serves, in order.
#[derive(Debug, Clone)]
pub struct Bus {
    name: String,
    stops: Vec<StopId>,
}

impl Bus {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    pub fn serves(&self, stop: StopId) -> bool {
        self.stops.contains(&stop)
    }
}

/// The stop graph plus every registered bus line.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    by_name: HashMap<String, StopId>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop. Names are unique.
    pub fn add_stop(&mut self, name: impl Into<String>) -> Result<StopId, TransitError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TransitError::DuplicateStop(name));
        }
        let id = StopId(self.stops.len());
        self.by_name.insert(name.clone(), id);
        self.stops.push(Stop {
            name,
            next: Vec::new(),
        });
        Ok(id)
    }

    /// Add a directed connection. Connecting the same pair twice is a no-op.
    pub fn connect(&mut self, from: StopId, to: StopId) -> Result<(), TransitError> {
        self.check_stop(to)?;
        let stop = self
            .stops
            .get_mut(from.0)
            .ok_or(TransitError::InvalidStop(from))?;
        if !stop.next.contains(&to) {
            stop.next.push(to);
        }
        Ok(())
    }

    /// Register a bus line serving `stops` in order.
    pub fn add_bus(&mut self, name: impl Into<String>, stops: &[StopId]) -> Result<BusId, TransitError> {
        for &s in stops {
            self.check_stop(s)?;
        }
        let id = BusId(self.buses.len());
        self.buses.push(Bus {
            name: name.into(),
            stops: stops.to_vec(),
        });
        Ok(id)
    }

    /// Look a stop up by name.
    pub fn stop_id(&self, name: &str) -> Result<StopId, TransitError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| TransitError::UnknownStop(name.to_string()))
    }

    pub fn stop(&self, id: StopId) -> Result<&Stop, TransitError> {
        self.stops.get(id.0).ok_or(TransitError::InvalidStop(id))
    }

    pub fn bus(&self, id: BusId) -> Result<&Bus, TransitError> {
        self.buses.get(id.0).ok_or(TransitError::InvalidBus(id))
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Every bus whose line includes `stop`.
    pub fn buses_at(&self, stop: StopId) -> BTreeSet<BusId> {
        self.buses
            .iter()
            .enumerate()
            .filter(|(_, bus)| bus.serves(stop))
            .map(|(i, _)| BusId(i))
            .collect()
    }

    pub(crate) fn check_stop(&self, id: StopId) -> Result<(), TransitError> {
        self.stop(id).map(|_| ())
    }

    pub(crate) fn stop_name(&self, id: StopId) -> &str {
        self.stops.get(id.0).map_or("?", |s| s.name.as_str())
    }

    pub(crate) fn bus_name(&self, id: BusId) -> &str {
        self.buses.get(id.0).map_or("?", |b| b.name.as_str())
    }
}

/// The nine-stop network with four bus lines used by the transit driver.
pub fn sample_network() -> Result<Network, TransitError> {
    let mut net = Network::new();
    let [a, b, c, d, e, f, g, h, j] =
        ["A", "B", "C", "D", "E", "F", "G", "H", "J"].map(|name| net.add_stop(name));
    let (a, b, c, d, e, f, g, h, j) = (a?, b?, c?, d?, e?, f?, g?, h?, j?);

    for (from, to) in [
        (a, b),
        (a, j),
        (b, c),
        (b, g),
        (c, f),
        (c, d),
        (d, h),
        (f, h),
        (e, c),
        (e, d),
        (g, f),
        (j, b),
        (j, e),
    ] {
        net.connect(from, to)?;
    }

    net.add_bus("bus number 1", &[a, b, c, d])?;
    net.add_bus("bus number 2", &[e, c, f, h])?;
    net.add_bus("bus number 3", &[j, b, g, f, h])?;
    net.add_bus("bus number 4", &[a, j, e, d, h])?;
    Ok(net)
}
