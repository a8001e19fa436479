//! Service alert entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, SystemReference};
use crate::value_objects::{AlertCause, AlertEffect};
use crate::{Identified, wire};

/// A service alert (planned work, delays, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    pub cause: AlertCause,
    pub effect: AlertEffect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_active_period: Option<ActivePeriod>,
    #[serde(default)]
    pub all_active_periods: Vec<ActivePeriod>,
    #[serde(default)]
    pub header: Vec<AlertText>,
    #[serde(default)]
    pub description: Vec<AlertText>,
    #[serde(default)]
    pub url: Vec<AlertText>,
}

impl Alert {
    /// Header in the requested language, else the first one available
    #[must_use]
    pub fn header_in(&self, language: &str) -> Option<&str> {
        AlertText::pick(&self.header, language)
    }

    #[must_use]
    pub fn description_in(&self, language: &str) -> Option<&str> {
        AlertText::pick(&self.description, language)
    }
}

/// Slim alert shape embedded in routes and agencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    pub cause: AlertCause,
    pub effect: AlertEffect,
}

/// Window during which an alert applies; unix seconds, open-ended if absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePeriod {
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<i64>,
}

impl ActivePeriod {
    #[must_use]
    pub fn starts_at_utc(&self) -> Option<DateTime<Utc>> {
        self.starts_at.and_then(super::unix_to_utc)
    }

    #[must_use]
    pub fn ends_at_utc(&self) -> Option<DateTime<Utc>> {
        self.ends_at.and_then(super::unix_to_utc)
    }

    /// Whether `at` falls inside the window
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        let at = at.timestamp();
        self.starts_at.is_none_or(|start| start <= at) && self.ends_at.is_none_or(|end| at < end)
    }
}

/// Localised alert text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl AlertText {
    fn pick<'a>(texts: &'a [Self], language: &str) -> Option<&'a str> {
        texts
            .iter()
            .find(|t| t.language.as_deref() == Some(language))
            .or_else(|| texts.first())
            .map(|t| t.text.as_str())
    }
}

impl Identified for Alert {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for AlertReference {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLANNED_WORK: &str = r#"{
        "id": "lmm:planned_work:12345",
        "cause": "MAINTENANCE",
        "effect": 4,
        "current_active_period": {"starts_at": "1700000000", "ends_at": "1700086400"},
        "all_active_periods": [{"starts_at": "1700000000", "ends_at": "1700086400"}],
        "header": [
            {"text": "[A] trains run local", "language": "en"},
            {"text": "<p>[A] trains run local</p>", "language": "en-html"}
        ],
        "description": [{"text": "Due to track maintenance"}]
    }"#;

    #[test]
    fn decodes_cause_by_name_and_effect_by_code() {
        let alert: Alert = serde_json::from_str(PLANNED_WORK).unwrap();
        assert_eq!(alert.cause, AlertCause::Maintenance);
        assert_eq!(alert.effect, AlertEffect::Detour);
    }

    #[test]
    fn picks_language_with_fallback() {
        let alert: Alert = serde_json::from_str(PLANNED_WORK).unwrap();
        assert_eq!(alert.header_in("en-html"), Some("<p>[A] trains run local</p>"));
        assert_eq!(alert.header_in("es"), Some("[A] trains run local"));
        assert_eq!(alert.description_in("en"), Some("Due to track maintenance"));
    }

    #[test]
    fn active_period_bounds() {
        let alert: Alert = serde_json::from_str(PLANNED_WORK).unwrap();
        let period = alert.current_active_period.unwrap();
        let inside = DateTime::from_timestamp(1_700_000_500, 0).unwrap();
        let after = DateTime::from_timestamp(1_700_086_400, 0).unwrap();
        assert!(period.contains(inside));
        assert!(!period.contains(after));
    }

    #[test]
    fn cause_gap_is_rejected() {
        let json = r#"{"id": "x", "cause": 1, "effect": 0}"#;
        assert!(serde_json::from_str::<AlertReference>(json).is_err());
    }
}
