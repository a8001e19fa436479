//! Route type value object
//!
//! Mirrors the GTFS `route_type` field. Codes 8-10 and 13-99 are unused
//! upstream and must stay unused here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// Kind of vehicle serving a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum RouteType {
    /// Tram, streetcar, light rail
    LightRail,
    /// Subway, metro
    Subway,
    /// Intercity or long-distance rail
    Rail,
    /// Bus
    Bus,
    /// Ferry
    Ferry,
    /// Street-level cable car
    CableTram,
    /// Gondola, suspended cable car
    AerialLift,
    /// Rail for steep inclines
    Funicular,
    /// Electric bus drawing power from overhead wires
    TrolleyBus,
    /// Monorail
    Monorail,
    /// Type not reported by the feed
    Unknown,
}

impl CodeTable for RouteType {
    const TABLE: &'static str = "route type";
    const ALL: &'static [Self] = &[
        Self::LightRail,
        Self::Subway,
        Self::Rail,
        Self::Bus,
        Self::Ferry,
        Self::CableTram,
        Self::AerialLift,
        Self::Funicular,
        Self::TrolleyBus,
        Self::Monorail,
        Self::Unknown,
    ];

    fn code(self) -> i32 {
        match self {
            Self::LightRail => 0,
            Self::Subway => 1,
            Self::Rail => 2,
            Self::Bus => 3,
            Self::Ferry => 4,
            Self::CableTram => 5,
            Self::AerialLift => 6,
            Self::Funicular => 7,
            Self::TrolleyBus => 11,
            Self::Monorail => 12,
            Self::Unknown => 100,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::LightRail => "LIGHT_RAIL",
            Self::Subway => "SUBWAY",
            Self::Rail => "RAIL",
            Self::Bus => "BUS",
            Self::Ferry => "FERRY",
            Self::CableTram => "CABLE_TRAM",
            Self::AerialLift => "AERIAL_LIFT",
            Self::Funicular => "FUNICULAR",
            Self::TrolleyBus => "TROLLEY_BUS",
            Self::Monorail => "MONORAIL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl RouteType {
    /// Whether the route belongs on the subway tab
    #[must_use]
    pub const fn is_subway(self) -> bool {
        matches!(self, Self::Subway)
    }

    /// Whether the route belongs on the bus tab
    #[must_use]
    pub const fn is_bus(self) -> bool {
        matches!(self, Self::Bus | Self::TrolleyBus)
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LightRail => "Light rail",
            Self::Subway => "Subway",
            Self::Rail => "Rail",
            Self::Bus => "Bus",
            Self::Ferry => "Ferry",
            Self::CableTram => "Cable tram",
            Self::AerialLift => "Aerial lift",
            Self::Funicular => "Funicular",
            Self::TrolleyBus => "Trolleybus",
            Self::Monorail => "Monorail",
            Self::Unknown => "Unknown",
        }
    }
}

impl TryFrom<WireCode> for RouteType {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<RouteType> for &'static str {
    fn from(value: RouteType) -> Self {
        value.as_str()
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
