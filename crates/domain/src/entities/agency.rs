//! Transit agency entity

use serde::{Deserialize, Serialize};

use super::{AlertReference, Resource, RouteReference, SystemReference};
use crate::Identified;

/// An organisation operating service within a system (GTFS `agency.txt`)
///
/// `language`, `phone`, `fare_url` and `email` are optional in GTFS and are
/// frequently missing from real payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    pub name: String,
    pub url: String,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteReference>,
    #[serde(default)]
    pub alerts: Vec<AlertReference>,
}

/// Slim agency shape embedded in routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    pub name: String,
}

impl Identified for Agency {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for AgencyReference {
    fn id(&self) -> &str {
        &self.id
    }
}
