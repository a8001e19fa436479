//! Occupancy status (GTFS Realtime `OccupancyStatus`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// How full a vehicle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum OccupancyStatus {
    Empty,
    ManySeatsAvailable,
    FewSeatsAvailable,
    StandingRoomOnly,
    CrushedStandingRoomOnly,
    Full,
    NotAcceptingPassengers,
}

impl CodeTable for OccupancyStatus {
    const TABLE: &'static str = "occupancy status";
    const ALL: &'static [Self] = &[
        Self::Empty,
        Self::ManySeatsAvailable,
        Self::FewSeatsAvailable,
        Self::StandingRoomOnly,
        Self::CrushedStandingRoomOnly,
        Self::Full,
        Self::NotAcceptingPassengers,
    ];

    fn code(self) -> i32 {
        match self {
            Self::Empty => 0,
            Self::ManySeatsAvailable => 1,
            Self::FewSeatsAvailable => 2,
            Self::StandingRoomOnly => 3,
            Self::CrushedStandingRoomOnly => 4,
            Self::Full => 5,
            Self::NotAcceptingPassengers => 6,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::ManySeatsAvailable => "MANY_SEATS_AVAILABLE",
            Self::FewSeatsAvailable => "FEW_SEATS_AVAILABLE",
            Self::StandingRoomOnly => "STANDING_ROOM_ONLY",
            Self::CrushedStandingRoomOnly => "CRUSHED_STANDING_ROOM_ONLY",
            Self::Full => "FULL",
            Self::NotAcceptingPassengers => "NOT_ACCEPTING_PASSENGERS",
        }
    }
}

impl OccupancyStatus {
    /// Whether a rider can still get on
    #[must_use]
    pub const fn accepts_riders(self) -> bool {
        !matches!(self, Self::Full | Self::NotAcceptingPassengers)
    }
}

impl TryFrom<WireCode> for OccupancyStatus {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<OccupancyStatus> for &'static str {
    fn from(value: OccupancyStatus) -> Self {
        value.as_str()
    }
}

impl fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OccupancyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
