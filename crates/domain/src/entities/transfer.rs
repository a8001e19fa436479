//! Transfer entity

use serde::{Deserialize, Serialize};

use super::{Resource, StopReference, SystemReference};
use crate::Identified;
use crate::value_objects::TransferType;

/// A permitted change between two stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_stop: Option<StopReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_stop: Option<StopReference>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transfer_type: Option<TransferType>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_transfer_time: Option<i32>,
}

impl Identified for Transfer {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_type_by_code() {
        let json = r#"{
            "id": "127-725",
            "from_stop": {"id": "127"},
            "to_stop": {"id": "725"},
            "type": 2,
            "min_transfer_time": 180
        }"#;
        let transfer: Transfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.transfer_type, Some(TransferType::RequiresTime));
        assert_eq!(transfer.min_transfer_time, Some(180));
    }
}
