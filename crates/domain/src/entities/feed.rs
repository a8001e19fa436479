//! Feed entity

use serde::{Deserialize, Serialize};

use super::{Resource, SystemReference};
use crate::{Identified, wire};

/// A GTFS static or realtime feed ingested by the system
///
/// Update timestamps are unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub last_update_ms: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub last_successful_update_ms: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub last_skipped_update_ms: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub last_failed_update_ms: Option<i64>,
}

impl Feed {
    /// Whether the most recent update attempt failed
    #[must_use]
    pub fn last_update_failed(&self) -> bool {
        match (self.last_failed_update_ms, self.last_successful_update_ms) {
            (Some(failed), Some(ok)) => failed > ok,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
}

impl Identified for Feed {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for FeedReference {
    fn id(&self) -> &str {
        &self.id
    }
}
