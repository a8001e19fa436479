//! System status value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// Install/update lifecycle state of a transit system on the Transiter instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum SystemStatus {
    Unknown,
    Installing,
    Active,
    InstallFailed,
    Updating,
    UpdateFailed,
    Deleting,
}

impl CodeTable for SystemStatus {
    const TABLE: &'static str = "system status";
    const ALL: &'static [Self] = &[
        Self::Unknown,
        Self::Installing,
        Self::Active,
        Self::InstallFailed,
        Self::Updating,
        Self::UpdateFailed,
        Self::Deleting,
    ];

    fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Installing => 1,
            Self::Active => 2,
            Self::InstallFailed => 3,
            Self::Updating => 4,
            Self::UpdateFailed => 5,
            Self::Deleting => 6,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Installing => "INSTALLING",
            Self::Active => "ACTIVE",
            Self::InstallFailed => "INSTALL_FAILED",
            Self::Updating => "UPDATING",
            Self::UpdateFailed => "UPDATE_FAILED",
            Self::Deleting => "DELETING",
        }
    }
}

impl SystemStatus {
    /// Whether the system currently serves data
    ///
    /// A failed update leaves the previous data in place, so it still counts.
    #[must_use]
    pub const fn is_serving(self) -> bool {
        matches!(self, Self::Active | Self::Updating | Self::UpdateFailed)
    }
}

impl TryFrom<WireCode> for SystemStatus {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<SystemStatus> for &'static str {
    fn from(value: SystemStatus) -> Self {
        value.as_str()
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SystemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_contiguous_zero_to_six() {
        for (expected, status) in SystemStatus::ALL.iter().enumerate() {
            assert_eq!(status.code(), i32::try_from(expected).unwrap());
        }
    }

    #[test]
    fn decode_by_name() {
        let status: SystemStatus = serde_json::from_str("\"INSTALL_FAILED\"").unwrap();
        assert_eq!(status, SystemStatus::InstallFailed);
    }

    #[test]
    fn decode_out_of_range_code_fails() {
        assert!(serde_json::from_str::<SystemStatus>("7").is_err());
        assert!(serde_json::from_str::<SystemStatus>("-1").is_err());
    }

    #[test]
    fn serving_states() {
        assert!(SystemStatus::Active.is_serving());
        assert!(SystemStatus::UpdateFailed.is_serving());
        assert!(!SystemStatus::Installing.is_serving());
        assert!(!SystemStatus::Deleting.is_serving());
    }
}
