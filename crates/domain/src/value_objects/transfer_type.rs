//! Transfer type value object (GTFS `transfer_type`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// How a transfer between two stops is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum TransferType {
    /// Recommended transfer point
    Recommended,
    /// Departing vehicle waits for the arriving one
    Timed,
    /// Needs at least `min_transfer_time` seconds
    RequiresTime,
    /// Transfers are not possible here
    NotPossible,
}

impl CodeTable for TransferType {
    const TABLE: &'static str = "transfer type";
    const ALL: &'static [Self] = &[
        Self::Recommended,
        Self::Timed,
        Self::RequiresTime,
        Self::NotPossible,
    ];

    fn code(self) -> i32 {
        match self {
            Self::Recommended => 0,
            Self::Timed => 1,
            Self::RequiresTime => 2,
            Self::NotPossible => 3,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "RECOMMENDED",
            Self::Timed => "TIMED",
            Self::RequiresTime => "REQUIRES_TIME",
            Self::NotPossible => "NOT_POSSIBLE",
        }
    }
}

impl TryFrom<WireCode> for TransferType {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<TransferType> for &'static str {
    fn from(value: TransferType) -> Self {
        value.as_str()
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransferType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
