//! Trip entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    AlertReference, Resource, RouteReference, ShapeReference, StopReference, StopTime,
    VehicleReference,
};
use crate::{Identified, wire};

/// One run of a vehicle along a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteReference>,
    /// Unix seconds
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
    /// Unix seconds
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_id: Option<bool>,
    #[serde(default)]
    pub stop_times: Vec<StopTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeReference>,
    #[serde(default)]
    pub alerts: Vec<AlertReference>,
}

impl Trip {
    #[must_use]
    pub fn started_at_utc(&self) -> Option<DateTime<Utc>> {
        self.started_at.and_then(super::unix_to_utc)
    }
}

/// Slim trip shape embedded in stop times and vehicles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteReference>,
    /// Only populated in some contexts; deprecated upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<StopReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_id: Option<bool>,
}

impl Identified for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for TripReference {
    fn id(&self) -> &str {
        &self.id
    }
}
