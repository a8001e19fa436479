//! Vehicle entity (GTFS Realtime vehicle position)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, StopReference, TripReference};
use crate::value_objects::{CongestionLevel, OccupancyStatus, VehicleStatus};
use crate::{Identified, wire};

/// A vehicle currently in service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip: Option<TripReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<VehicleStatus>,
    /// Unix seconds
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion_level: Option<CongestionLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy_status: Option<OccupancyStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy_percentage: Option<i32>,
}

impl Vehicle {
    #[must_use]
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.and_then(super::unix_to_utc)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

impl Identified for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for VehicleReference {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_position_with_enums() {
        let json = r#"{
            "id": "R160-8713",
            "trip": {"id": "064650_A..S", "route": {"id": "A"}},
            "latitude": 40.7,
            "longitude": -73.9,
            "current_status": "STOPPED_AT",
            "updated_at": "1700000000",
            "congestion_level": 1,
            "occupancy_status": "FEW_SEATS_AVAILABLE"
        }"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.current_status, Some(VehicleStatus::StoppedAt));
        assert_eq!(vehicle.congestion_level, Some(CongestionLevel::RunningSmoothly));
        assert!(vehicle.occupancy_status.is_some_and(OccupancyStatus::accepts_riders));
        assert_eq!(vehicle.updated_at_utc().map(|t| t.timestamp()), Some(1_700_000_000));
    }
}
