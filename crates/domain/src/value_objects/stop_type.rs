//! Stop type value object (GTFS `location_type`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// Role of a stop in the station hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum StopType {
    /// A boarding location (platform or pole)
    Stop,
    /// A physical structure containing one or more stops
    Station,
    /// A way into or out of a station
    EntranceOrExit,
    /// A pathway node inside a station
    GenericNode,
    /// A specific area on a platform where riders board
    BoardingArea,
    /// A platform, as reported by some feeds instead of `STOP`
    Platform,
}

impl CodeTable for StopType {
    const TABLE: &'static str = "stop type";
    const ALL: &'static [Self] = &[
        Self::Stop,
        Self::Station,
        Self::EntranceOrExit,
        Self::GenericNode,
        Self::BoardingArea,
        Self::Platform,
    ];

    fn code(self) -> i32 {
        match self {
            Self::Stop => 0,
            Self::Station => 1,
            Self::EntranceOrExit => 2,
            Self::GenericNode => 3,
            Self::BoardingArea => 4,
            Self::Platform => 5,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "STOP",
            Self::Station => "STATION",
            Self::EntranceOrExit => "ENTRANCE_OR_EXIT",
            Self::GenericNode => "GENERIC_NODE",
            Self::BoardingArea => "BOARDING_AREA",
            Self::Platform => "PLATFORM",
        }
    }
}

impl StopType {
    /// Whether riders can board here directly
    #[must_use]
    pub const fn is_boardable(self) -> bool {
        matches!(self, Self::Stop | Self::Platform | Self::BoardingArea)
    }
}

impl TryFrom<WireCode> for StopType {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<StopType> for &'static str {
    fn from(value: StopType) -> Self {
        value.as_str()
    }
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StopType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
