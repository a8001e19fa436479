//! Stop search mode for the list-stops endpoint

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// How the list-stops endpoint selects and orders stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum SearchMode {
    /// Page through stops ordered by id
    #[default]
    Id,
    /// Stops within `max_distance` of a coordinate, nearest first
    Distance,
}

impl CodeTable for SearchMode {
    const TABLE: &'static str = "search mode";
    const ALL: &'static [Self] = &[Self::Id, Self::Distance];

    fn code(self) -> i32 {
        match self {
            Self::Id => 0,
            Self::Distance => 1,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Distance => "DISTANCE",
        }
    }
}

impl TryFrom<WireCode> for SearchMode {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<SearchMode> for &'static str {
    fn from(value: SearchMode) -> Self {
        value.as_str()
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}
