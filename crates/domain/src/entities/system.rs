//! Transit system entity

use serde::{Deserialize, Serialize};

use super::{ChildResources, Resource};
use crate::Identified;
use crate::value_objects::SystemStatus;

/// A transit system installed on the Transiter instance, e.g. one city's subway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    pub name: String,
    pub status: SystemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agencies: Option<ChildResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeds: Option<ChildResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<ChildResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<ChildResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers: Option<ChildResources>,
}

impl System {
    /// Number of stops, when the response carried the stop collection summary
    #[must_use]
    pub fn stop_count(&self) -> Option<i64> {
        self.stops.as_ref().map(|s| s.count)
    }

    /// Number of routes, when the response carried the route collection summary
    #[must_use]
    pub fn route_count(&self) -> Option<i64> {
        self.routes.as_ref().map(|r| r.count)
    }
}

/// Slim system shape embedded in other entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

impl Identified for System {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for SystemReference {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::CodeTable;

    fn payload(status: &str) -> String {
        format!(
            r#"{{
                "id": "us-ny-nycsubway",
                "resource": {{"path": "systems/us-ny-nycsubway", "url": "https://demo.transiter.dev/systems/us-ny-nycsubway"}},
                "name": "New York City Subway",
                "status": {status},
                "agencies": {{"count": "1", "path": "systems/us-ny-nycsubway/agencies"}},
                "feeds": {{"count": "3", "path": "systems/us-ny-nycsubway/feeds"}},
                "routes": {{"count": "29", "path": "systems/us-ny-nycsubway/routes"}},
                "stops": {{"count": "1488", "path": "systems/us-ny-nycsubway/stops"}},
                "transfers": {{"count": "0", "path": "systems/us-ny-nycsubway/transfers"}},
                "someFutureField": {{"nested": true}}
            }}"#
        )
    }

    #[test]
    fn decodes_full_payload() {
        let system: System = serde_json::from_str(&payload("\"ACTIVE\"")).unwrap();
        assert_eq!(system.id, "us-ny-nycsubway");
        assert_eq!(system.status, SystemStatus::Active);
        assert_eq!(system.stop_count(), Some(1488));
        assert_eq!(system.route_count(), Some(29));
    }

    #[test]
    fn status_code_survives_decode() {
        for status in SystemStatus::ALL {
            let system: System = serde_json::from_str(&payload(&status.code().to_string())).unwrap();
            assert_eq!(system.status.code(), status.code());
        }
    }

    #[test]
    fn unknown_status_fails_decode() {
        let err = serde_json::from_str::<System>(&payload("\"HIBERNATING\"")).unwrap_err();
        assert!(err.to_string().contains("HIBERNATING"));
    }

    #[test]
    fn child_resources_are_optional() {
        let json = r#"{"id": "x", "name": "X", "status": 2}"#;
        let system: System = serde_json::from_str(json).unwrap();
        assert!(system.resource.is_none());
        assert_eq!(system.stop_count(), None);
    }

    #[test]
    fn reference_is_a_separate_shape() {
        let json = r#"{"id": "us-ny-nycsubway", "resource": {"path": "systems/us-ny-nycsubway"}}"#;
        let reference: SystemReference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.id(), "us-ny-nycsubway");
        // A reference lacks name and status, so it cannot pass as a full system
        assert!(serde_json::from_str::<System>(json).is_err());
    }
}
