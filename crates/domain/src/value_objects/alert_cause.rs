//! Alert cause value object (GTFS Realtime `Alert.Cause`)
//!
//! GTFS Realtime starts the enumeration at 1, so code 1 has no meaning here
//! and `OTHER_CAUSE` sits at 2.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// Reported cause of a service alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum AlertCause {
    UnknownCause,
    OtherCause,
    TechnicalProblem,
    Strike,
    Demonstration,
    Accident,
    Holiday,
    Weather,
    Maintenance,
    Construction,
    PoliceActivity,
    MedicalEmergency,
}

impl CodeTable for AlertCause {
    const TABLE: &'static str = "alert cause";
    const ALL: &'static [Self] = &[
        Self::UnknownCause,
        Self::OtherCause,
        Self::TechnicalProblem,
        Self::Strike,
        Self::Demonstration,
        Self::Accident,
        Self::Holiday,
        Self::Weather,
        Self::Maintenance,
        Self::Construction,
        Self::PoliceActivity,
        Self::MedicalEmergency,
    ];

    fn code(self) -> i32 {
        match self {
            Self::UnknownCause => 0,
            Self::OtherCause => 2,
            Self::TechnicalProblem => 3,
            Self::Strike => 4,
            Self::Demonstration => 5,
            Self::Accident => 6,
            Self::Holiday => 7,
            Self::Weather => 8,
            Self::Maintenance => 9,
            Self::Construction => 10,
            Self::PoliceActivity => 11,
            Self::MedicalEmergency => 12,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::UnknownCause => "UNKNOWN_CAUSE",
            Self::OtherCause => "OTHER_CAUSE",
            Self::TechnicalProblem => "TECHNICAL_PROBLEM",
            Self::Strike => "STRIKE",
            Self::Demonstration => "DEMONSTRATION",
            Self::Accident => "ACCIDENT",
            Self::Holiday => "HOLIDAY",
            Self::Weather => "WEATHER",
            Self::Maintenance => "MAINTENANCE",
            Self::Construction => "CONSTRUCTION",
            Self::PoliceActivity => "POLICE_ACTIVITY",
            Self::MedicalEmergency => "MEDICAL_EMERGENCY",
        }
    }
}

impl TryFrom<WireCode> for AlertCause {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<AlertCause> for &'static str {
    fn from(value: AlertCause) -> Self {
        value.as_str()
    }
}

impl fmt::Display for AlertCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AlertCause {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
