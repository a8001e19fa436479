//! Continuous pickup/drop-off policy (GTFS `continuous_pickup`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// Whether riders may board or alight anywhere along a route's path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum ContinuousPolicy {
    Allowed,
    NotAllowed,
    PhoneAgency,
    CoordinateWithDriver,
}

impl CodeTable for ContinuousPolicy {
    const TABLE: &'static str = "continuous policy";
    const ALL: &'static [Self] = &[
        Self::Allowed,
        Self::NotAllowed,
        Self::PhoneAgency,
        Self::CoordinateWithDriver,
    ];

    fn code(self) -> i32 {
        match self {
            Self::Allowed => 0,
            Self::NotAllowed => 1,
            Self::PhoneAgency => 2,
            Self::CoordinateWithDriver => 3,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Allowed => "ALLOWED",
            Self::NotAllowed => "NOT_ALLOWED",
            Self::PhoneAgency => "PHONE_AGENCY",
            Self::CoordinateWithDriver => "COORDINATE_WITH_DRIVER",
        }
    }
}

impl TryFrom<WireCode> for ContinuousPolicy {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<ContinuousPolicy> for &'static str {
    fn from(value: ContinuousPolicy) -> Self {
        value.as_str()
    }
}

impl fmt::Display for ContinuousPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContinuousPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
