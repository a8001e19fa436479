//! Alert effect value object (GTFS Realtime `Alert.Effect`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CodeTable;
use crate::errors::DomainError;
use crate::wire::WireCode;

/// Effect of a service alert on riders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "&'static str")]
pub enum AlertEffect {
    UnknownEffect,
    NoService,
    ReducedService,
    SignificantDelays,
    Detour,
    AdditionalService,
    ModifiedService,
    OtherEffect,
    StopMoved,
    NoEffect,
    AccessibilityIssue,
}

impl CodeTable for AlertEffect {
    const TABLE: &'static str = "alert effect";
    const ALL: &'static [Self] = &[
        Self::UnknownEffect,
        Self::NoService,
        Self::ReducedService,
        Self::SignificantDelays,
        Self::Detour,
        Self::AdditionalService,
        Self::ModifiedService,
        Self::OtherEffect,
        Self::StopMoved,
        Self::NoEffect,
        Self::AccessibilityIssue,
    ];

    fn code(self) -> i32 {
        match self {
            Self::UnknownEffect => 0,
            Self::NoService => 1,
            Self::ReducedService => 2,
            Self::SignificantDelays => 3,
            Self::Detour => 4,
            Self::AdditionalService => 5,
            Self::ModifiedService => 6,
            Self::OtherEffect => 7,
            Self::StopMoved => 9,
            Self::NoEffect => 10,
            Self::AccessibilityIssue => 11,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::UnknownEffect => "UNKNOWN_EFFECT",
            Self::NoService => "NO_SERVICE",
            Self::ReducedService => "REDUCED_SERVICE",
            Self::SignificantDelays => "SIGNIFICANT_DELAYS",
            Self::Detour => "DETOUR",
            Self::AdditionalService => "ADDITIONAL_SERVICE",
            Self::ModifiedService => "MODIFIED_SERVICE",
            Self::OtherEffect => "OTHER_EFFECT",
            Self::StopMoved => "STOP_MOVED",
            Self::NoEffect => "NO_EFFECT",
            Self::AccessibilityIssue => "ACCESSIBILITY_ISSUE",
        }
    }
}

impl AlertEffect {
    /// Whether the effect disrupts regular service
    #[must_use]
    pub const fn is_disruptive(self) -> bool {
        matches!(
            self,
            Self::NoService | Self::ReducedService | Self::SignificantDelays | Self::Detour
        )
    }
}

impl TryFrom<WireCode> for AlertEffect {
    type Error = DomainError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<AlertEffect> for &'static str {
    fn from(value: AlertEffect) -> Self {
        value.as_str()
    }
}

impl fmt::Display for AlertEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AlertEffect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_is_unassigned() {
        assert_eq!(AlertEffect::from_code(8), None);
        assert_eq!(AlertEffect::StopMoved.code(), 9);
    }

    #[test]
    fn disruptive_effects() {
        assert!(AlertEffect::NoService.is_disruptive());
        assert!(!AlertEffect::AdditionalService.is_disruptive());
    }
}
