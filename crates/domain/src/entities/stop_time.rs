//! Stop time entity (arrival/departure of a trip at a stop)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{StopReference, TripReference, VehicleReference};
use crate::wire;

/// A realtime or scheduled visit of a trip to a stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopTime {
    pub stop: StopReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip: Option<TripReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<StopReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<EstimatedTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<EstimatedTime>,
    /// False once the vehicle has left the stop
    #[serde(default)]
    pub future: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headsign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
}

impl StopTime {
    /// Best known time the vehicle is at the stop: arrival, else departure
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.arrival
            .as_ref()
            .and_then(EstimatedTime::time_utc)
            .or_else(|| self.departure.as_ref().and_then(EstimatedTime::time_utc))
    }
}

/// A predicted time with delay and uncertainty, all in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedTime {
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_int", skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<i64>,
}

impl EstimatedTime {
    #[must_use]
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        self.time.and_then(super::unix_to_utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_prefers_arrival() {
        let json = r#"{
            "stop": {"id": "A02N"},
            "arrival": {"time": "1700000100"},
            "departure": {"time": "1700000160", "delay": "0"},
            "future": true
        }"#;
        let stop_time: StopTime = serde_json::from_str(json).unwrap();
        assert_eq!(stop_time.time().map(|t| t.timestamp()), Some(1_700_000_100));
    }

    #[test]
    fn time_falls_back_to_departure() {
        let json = r#"{"stop": {"id": "A02N"}, "departure": {"time": 1700000160}}"#;
        let stop_time: StopTime = serde_json::from_str(json).unwrap();
        assert_eq!(stop_time.time().map(|t| t.timestamp()), Some(1_700_000_160));
        assert!(!stop_time.future);
    }
}
