//! Stop entity
//!
//! Stops form a hierarchy (station → platforms → boarding areas). Parent
//! and children are carried as [`StopReference`]s, so the hierarchy never
//! becomes a cyclic object graph; resolving an id back to a full [`Stop`]
//! takes another request.

use serde::{Deserialize, Serialize};

use super::{Alert, Resource, RouteReference, StopTime, SystemReference, Transfer};
use crate::Identified;
use crate::value_objects::{GeoLocation, StopType};

/// A stop, station, entrance or other location in a system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub stop_type: Option<StopType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_stop: Option<StopReference>,
    #[serde(default)]
    pub child_stops: Vec<StopReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheelchair_boarding: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_code: Option<String>,
    #[serde(default)]
    pub service_maps: Vec<StopServiceMap>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub stop_times: Vec<StopTime>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default)]
    pub headsign_rules: Vec<HeadsignRule>,
}

impl Stop {
    /// Both coordinates, when the feed supplies them and they are in range
    #[must_use]
    pub fn location(&self) -> Option<GeoLocation> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => GeoLocation::new(lat, lon).ok(),
            _ => None,
        }
    }

    /// Name for display, falling back to the id
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Ids of the routes serving this stop, deduplicated, in first-seen order
    #[must_use]
    pub fn route_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for route in self.service_maps.iter().flat_map(|m| &m.routes) {
            if !ids.contains(&route.id.as_str()) {
                ids.push(&route.id);
            }
        }
        ids
    }
}

/// Slim stop shape used for parent/child links and inside other entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Rule picking the headsign shown at a stop (NYC uses the track to decide)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadsignRule {
    pub stop: StopReference,
    #[serde(default)]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    pub headsign: String,
}

/// Routes calling at a stop under one service-map configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopServiceMap {
    pub config_id: String,
    #[serde(default)]
    pub routes: Vec<RouteReference>,
}

impl Identified for Stop {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for StopReference {
    fn id(&self) -> &str {
        &self.id
    }
}
