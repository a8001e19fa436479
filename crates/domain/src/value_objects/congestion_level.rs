//! Congestion level (GTFS Realtime `CongestionLevel`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// Traffic congestion affecting a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum CongestionLevel {
    UnknownCongestionLevel,
    RunningSmoothly,
    StopAndGo,
    Congestion,
    SevereCongestion,
}

impl CodeTable for CongestionLevel {
    const TABLE: &'static str = "congestion level";
    const ALL: &'static [Self] = &[
        Self::UnknownCongestionLevel,
        Self::RunningSmoothly,
        Self::StopAndGo,
        Self::Congestion,
        Self::SevereCongestion,
    ];

    fn code(self) -> i32 {
        match self {
            Self::UnknownCongestionLevel => 0,
            Self::RunningSmoothly => 1,
            Self::StopAndGo => 2,
            Self::Congestion => 3,
            Self::SevereCongestion => 4,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::UnknownCongestionLevel => "UNKNOWN_CONGESTION_LEVEL",
            Self::RunningSmoothly => "RUNNING_SMOOTHLY",
            Self::StopAndGo => "STOP_AND_GO",
            Self::Congestion => "CONGESTION",
            Self::SevereCongestion => "SEVERE_CONGESTION",
        }
    }
}

impl TryFrom<WireCode> for CongestionLevel {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<CongestionLevel> for &'static str {
    fn from(value: CongestionLevel) -> Self {
        value.as_str()
    }
}

impl fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CongestionLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
