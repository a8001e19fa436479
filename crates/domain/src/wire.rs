//! Wire-format helpers shared by the entity decoders
//!
//! Transiter serves JSON through a gRPC gateway, which renders enumerations
//! by name and 64-bit integers as decimal strings. Older deployments and
//! hand-written fixtures use plain integers for both, so the decoders here
//! accept either form.

use serde::{Deserialize, Deserializer};

use crate::errors::DomainError;
use crate::value_objects::CodeTable;

/// An enumeration value as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireCode {
    /// Explicit integer code, e.g. `12`
    Code(i64),
    /// Upstream name, e.g. `"MONORAIL"`
    Name(String),
}

impl WireCode {
    /// Resolve against a code table
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownCode`] when the name or code is not part
    /// of the table.
    pub fn resolve<T: CodeTable>(self) -> Result<T, DomainError> {
        match self {
            Self::Code(code) => {
                T::from_code(code).ok_or_else(|| DomainError::unknown_code(T::TABLE, code.to_string()))
            },
            Self::Name(name) => T::from_name(&name).ok_or_else(|| DomainError::unknown_code(T::TABLE, name)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireInt {
    Int(i64),
    Text(String),
}

impl WireInt {
    fn into_i64(self) -> Result<i64, DomainError> {
        match self {
            Self::Int(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| DomainError::InvalidInteger(text)),
        }
    }
}

/// Deserialize an integer sent either as a JSON number or a decimal string
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    WireInt::deserialize(deserializer)?
        .into_i64()
        .map_err(serde::de::Error::custom)
}

/// Optional variant of [`int`]; `null` decodes to `None`
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<WireInt>::deserialize(deserializer)?
        .map(WireInt::into_i64)
        .transpose()
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::value_objects::RouteType;

    #[derive(Debug, Deserialize)]
    struct Counter {
        #[serde(deserialize_with = "int")]
        count: i64,
        #[serde(default, deserialize_with = "opt_int")]
        updated_at: Option<i64>,
    }

    #[test]
    fn int_accepts_number_and_string() {
        let a: Counter = serde_json::from_str(r#"{"count": 7}"#).unwrap();
        let b: Counter = serde_json::from_str(r#"{"count": "7"}"#).unwrap();
        assert_eq!(a.count, 7);
        assert_eq!(b.count, 7);
    }

    #[test]
    fn int_rejects_non_numeric_string() {
        let err = serde_json::from_str::<Counter>(r#"{"count": "seven"}"#).unwrap_err();
        assert!(err.to_string().contains("seven"));
    }

    #[test]
    fn opt_int_handles_absent_null_and_string() {
        let absent: Counter = serde_json::from_str(r#"{"count": 1}"#).unwrap();
        let null: Counter = serde_json::from_str(r#"{"count": 1, "updated_at": null}"#).unwrap();
        let text: Counter =
            serde_json::from_str(r#"{"count": 1, "updated_at": "1700000000"}"#).unwrap();
        assert_eq!(absent.updated_at, None);
        assert_eq!(null.updated_at, None);
        assert_eq!(text.updated_at, Some(1_700_000_000));
    }

    #[test]
    fn wire_code_resolves_name_and_code() {
        let by_name: RouteType = WireCode::Name("MONORAIL".to_string()).resolve().unwrap();
        let by_code: RouteType = WireCode::Code(12).resolve().unwrap();
        assert_eq!(by_name, RouteType::Monorail);
        assert_eq!(by_code, RouteType::Monorail);
    }

    #[test]
    fn wire_code_rejects_gap() {
        let err = WireCode::Code(8).resolve::<RouteType>().unwrap_err();
        assert_eq!(err, DomainError::unknown_code("route type", "8"));
    }
}
