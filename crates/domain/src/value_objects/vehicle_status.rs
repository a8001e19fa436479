//! Vehicle stop status (GTFS Realtime `VehicleStopStatus`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// Position of a vehicle relative to its current stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum VehicleStatus {
    /// About to arrive at the stop
    IncomingAt,
    /// Standing at the stop
    StoppedAt,
    /// Departed the previous stop and in transit
    InTransitTo,
}

impl CodeTable for VehicleStatus {
    const TABLE: &'static str = "vehicle status";
    const ALL: &'static [Self] = &[Self::IncomingAt, Self::StoppedAt, Self::InTransitTo];

    fn code(self) -> i32 {
        match self {
            Self::IncomingAt => 0,
            Self::StoppedAt => 1,
            Self::InTransitTo => 2,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::IncomingAt => "INCOMING_AT",
            Self::StoppedAt => "STOPPED_AT",
            Self::InTransitTo => "IN_TRANSIT_TO",
        }
    }
}

impl TryFrom<WireCode> for VehicleStatus {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<VehicleStatus> for &'static str {
    fn from(value: VehicleStatus) -> Self {
        value.as_str()
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
