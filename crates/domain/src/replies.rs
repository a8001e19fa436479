//! List reply envelopes
//!
//! Transiter wraps list results in an object keyed by the collection name
//! (`{"systems": [...]}`). Some deployments, and older clients, hand back
//! the bare array instead. Both forms decode to the same reply type. An
//! object without the collection key is not a listing and fails to decode.

use serde::de::{self, DeserializeOwned, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::entities::{Agency, Route, Stop, System};

/// Reply of `GET /systems`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSystemsReply {
    pub systems: Vec<System>,
}

/// Reply of `GET /systems/{system}/agencies`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListAgenciesReply {
    pub agencies: Vec<Agency>,
}

/// Reply of `GET /systems/{system}/routes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRoutesReply {
    pub routes: Vec<Route>,
}

/// Reply of `GET /systems/{system}/stops`
///
/// Results are paginated by id: pass `next_id` back as `first_id` to fetch
/// the following page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListStopsReply {
    pub stops: Vec<Stop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_id: Option<String>,
}

impl ListStopsReply {
    /// Whether another page is available
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next_id.is_some()
    }
}

/// Split a listing into its items and the remaining envelope fields
fn decode_listing<T, E>(value: Value, field: &'static str) -> Result<(Vec<T>, Map<String, Value>), E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    match value {
        Value::Array(_) => Ok((serde_json::from_value(value).map_err(E::custom)?, Map::new())),
        Value::Object(mut envelope) => {
            let items = match envelope.remove(field) {
                None => return Err(E::missing_field(field)),
                Some(Value::Null) => Vec::new(),
                Some(items) => serde_json::from_value(items).map_err(E::custom)?,
            };
            Ok((items, envelope))
        },
        Value::Null => Err(E::invalid_type(Unexpected::Unit, &"a reply object or an array")),
        Value::Bool(b) => Err(E::invalid_type(Unexpected::Bool(b), &"a reply object or an array")),
        Value::Number(_) => Err(E::invalid_type(Unexpected::Other("number"), &"a reply object or an array")),
        Value::String(s) => Err(E::invalid_type(Unexpected::Str(&s), &"a reply object or an array")),
    }
}

impl<'de> Deserialize<'de> for ListSystemsReply {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (systems, _) = decode_listing(Value::deserialize(deserializer)?, "systems")?;
        Ok(Self { systems })
    }
}

impl<'de> Deserialize<'de> for ListAgenciesReply {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (agencies, _) = decode_listing(Value::deserialize(deserializer)?, "agencies")?;
        Ok(Self { agencies })
    }
}

impl<'de> Deserialize<'de> for ListRoutesReply {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (routes, _) = decode_listing(Value::deserialize(deserializer)?, "routes")?;
        Ok(Self { routes })
    }
}

impl<'de> Deserialize<'de> for ListStopsReply {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (stops, mut rest) = decode_listing(Value::deserialize(deserializer)?, "stops")?;
        let next_id = match rest.remove("next_id") {
            None | Some(Value::Null) => None,
            Some(id) => Some(serde_json::from_value(id).map_err(de::Error::custom)?),
        };
        Ok(Self { stops, next_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::SystemStatus;

    #[test]
    fn systems_from_envelope() {
        let json = r#"{"systems": [{"id": "us-ny-nycsubway", "name": "New York City Subway", "status": "ACTIVE"}]}"#;
        let reply: ListSystemsReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.systems.len(), 1);
        assert_eq!(reply.systems[0].status, SystemStatus::Active);
    }

    #[test]
    fn systems_from_bare_array() {
        let json = r#"[{"id": "us-ca-bart", "name": "BART", "status": 2}]"#;
        let reply: ListSystemsReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.systems[0].id, "us-ca-bart");
    }

    #[test]
    fn null_collection_is_empty_list() {
        let reply: ListAgenciesReply = serde_json::from_str(r#"{"agencies": null}"#).unwrap();
        assert!(reply.agencies.is_empty());
    }

    #[test]
    fn object_without_collection_is_rejected() {
        let err = serde_json::from_str::<ListAgenciesReply>("{}").unwrap_err();
        assert!(err.to_string().contains("missing field `agencies`"));

        let error_body = r#"{"code": 5, "message": "system not found"}"#;
        let err = serde_json::from_str::<ListStopsReply>(error_body).unwrap_err();
        assert!(err.to_string().contains("missing field `stops`"));
        assert!(serde_json::from_str::<ListSystemsReply>(error_body).is_err());
        assert!(serde_json::from_str::<ListRoutesReply>(error_body).is_err());
    }

    #[test]
    fn stops_carry_next_id() {
        let json = r#"{"stops": [{"id": "101"}], "next_id": "103"}"#;
        let reply: ListStopsReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.stops.len(), 1);
        assert_eq!(reply.next_id.as_deref(), Some("103"));
        assert!(reply.has_more());
    }

    #[test]
    fn last_page_has_no_next_id() {
        let reply: ListStopsReply = serde_json::from_str(r#"{"stops": []}"#).unwrap();
        assert!(!reply.has_more());
    }

    #[test]
    fn rejects_scalar_body() {
        let err = serde_json::from_str::<ListRoutesReply>(r#""oops""#).unwrap_err();
        assert!(err.to_string().contains("reply object or an array"));
    }

    #[test]
    fn bad_item_fails_whole_reply() {
        let json = r#"{"routes": [{"id": "A", "type": 9}]}"#;
        let err = serde_json::from_str::<ListRoutesReply>(json).unwrap_err();
        assert!(err.to_string().contains("9"));
    }
}
