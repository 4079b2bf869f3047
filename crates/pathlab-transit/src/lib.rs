//! A toy transit planner: enumerate every stop sequence between two stops
//! of a directed network and keep the ones a passenger can ride with the
//! registered bus lines.

pub mod error;
pub mod network;
pub mod route;

pub use error::TransitError;
pub use network::{Bus, BusId, Network, Stop, StopId, sample_network};
pub use route::{Leg, Route, RouteDisplay};
