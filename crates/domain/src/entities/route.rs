//! Route entity

use serde::{Deserialize, Serialize};

use super::{AgencyReference, AlertReference, Resource, StopReference, SystemReference};
use crate::Identified;
use crate::value_objects::{ContinuousPolicy, RouteType};

/// A route (line) in a system, e.g. the NYC `A` train
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    /// Hex colour without the leading `#`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Display ordering only; carries no other meaning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuous_pickup: Option<ContinuousPolicy>,
    #[serde(
        default,
        alias = "continuous_dropoff",
        skip_serializing_if = "Option::is_none"
    )]
    pub continuous_drop_off: Option<ContinuousPolicy>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub route_type: Option<RouteType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<AgencyReference>,
    #[serde(default)]
    pub alerts: Vec<AlertReference>,
    /// Estimated seconds between trains, when the system can compute it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_headway: Option<i32>,
    #[serde(default)]
    pub service_maps: Vec<RouteServiceMap>,
}

impl Route {
    /// Short name, else long name, else the id
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.long_name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.id)
    }

    #[must_use]
    pub fn is_subway(&self) -> bool {
        self.route_type.is_some_and(RouteType::is_subway)
    }

    #[must_use]
    pub fn is_bus(&self) -> bool {
        self.route_type.is_some_and(RouteType::is_bus)
    }

    /// Order routes the way the agency wants them listed
    ///
    /// Routes without a sort order go last; ties break on id.
    pub fn sort_for_display(routes: &mut [Self]) {
        routes.sort_by(|a, b| {
            let key_a = a.sort_order.unwrap_or(i32::MAX);
            let key_b = b.sort_order.unwrap_or(i32::MAX);
            key_a.cmp(&key_b).then_with(|| a.id.cmp(&b.id))
        });
    }
}

/// Slim route shape embedded in stops, trips and agencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Stops visited by a route under one service-map configuration, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteServiceMap {
    pub config_id: String,
    #[serde(default)]
    pub stops: Vec<StopReference>,
}

impl Identified for Route {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for RouteReference {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: &str, sort_order: Option<i32>) -> Route {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "sort_order": sort_order,
        }))
        .unwrap()
    }

    #[test]
    fn decodes_subway_route() {
        let json = r#"{
            "id": "A",
            "resource": {"path": "systems/us-ny-nycsubway/routes/A"},
            "system": {"id": "us-ny-nycsubway"},
            "short_name": "A",
            "long_name": "8 Avenue Express",
            "color": "0062CF",
            "text_color": "FFFFFF",
            "sort_order": 1,
            "continuous_pickup": "NOT_ALLOWED",
            "continuous_drop_off": "NOT_ALLOWED",
            "type": "SUBWAY",
            "agency": {"id": "MTA NYCT", "name": "MTA New York City Transit"},
            "estimated_headway": 480,
            "service_maps": [
                {"config_id": "alltimes", "stops": [{"id": "A02"}, {"id": "A03"}]}
            ]
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.route_type, Some(RouteType::Subway));
        assert_eq!(route.continuous_drop_off, Some(ContinuousPolicy::NotAllowed));
        assert_eq!(route.agency.as_ref().map(|a| a.name.as_str()), Some("MTA New York City Transit"));
        assert_eq!(route.service_maps[0].stops.len(), 2);
        assert!(route.is_subway());
        assert!(!route.is_bus());
    }

    #[test]
    fn accepts_legacy_dropoff_spelling() {
        let json = r#"{"id": "M15", "type": 3, "continuous_dropoff": 0}"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.continuous_drop_off, Some(ContinuousPolicy::Allowed));
        assert!(route.is_bus());
    }

    #[test]
    fn display_name_fallbacks() {
        let mut r = route("GS", None);
        assert_eq!(r.display_name(), "GS");
        r.long_name = Some("42 St Shuttle".to_string());
        assert_eq!(r.display_name(), "42 St Shuttle");
        r.short_name = Some("S".to_string());
        assert_eq!(r.display_name(), "S");
    }

    #[test]
    fn sort_for_display_puts_unordered_last() {
        let mut routes = vec![route("Z", None), route("C", Some(3)), route("A", Some(1)), route("B", None)];
        Route::sort_for_display(&mut routes);
        let ids: Vec<&str> = routes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C", "B", "Z"]);
    }
}
