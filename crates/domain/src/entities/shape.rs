//! Shape entity (the geographic path of a trip)

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default)]
    pub points: Vec<ShapePoint>,
}

/// One vertex of a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapePoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Distance travelled along the shape, in the feed's units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

impl Identified for Shape {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ShapeReference {
    fn id(&self) -> &str {
        &self.id
    }
}
