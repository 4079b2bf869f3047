use thiserror::Error;

use crate::network::{BusId, StopId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitError {
    #[error("stop \u{201c}{0}\u{201d} already exists")]
    DuplicateStop(String),
    #[error("no stop named \u{201c}{0}\u{201d}")]
    UnknownStop(String),
    #[error("{0} does not belong to this network")]
    InvalidStop(StopId),
    #[error("{0} does not belong to this network")]
    InvalidBus(BusId),
}
