//! Resource locators attached to every entity

use serde::{Deserialize, Serialize};

use crate::wire;

/// Where an entity lives on the Transiter instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Path relative to the API root, e.g. `systems/us-ny-nycsubway`
    pub path: String,
    /// Absolute URL, present when the instance knows its public address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Summary of a collection owned by a system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildResources {
    /// Number of items in the collection
    #[serde(deserialize_with = "wire::int")]
    pub count: i64,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_resources_accepts_string_count() {
        let json = r#"{"count": "472", "path": "systems/us-ny-nycsubway/stops"}"#;
        let children: ChildResources = serde_json::from_str(json).unwrap();
        assert_eq!(children.count, 472);
        assert!(children.url.is_none());
    }
}
