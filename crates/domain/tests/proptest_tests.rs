//! Property-based tests for the code tables and wire decoders
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{
    AlertCause, AlertEffect, CodeTable, CongestionLevel, ContinuousPolicy, GeoLocation,
    OccupancyStatus, RouteType, SearchMode, StopType, SystemStatus, TransferType, VehicleStatus,
};
use domain::{ListStopsReply, Stop};
use proptest::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn decodes_code<T>(code: i64) -> Option<T>
where
    T: CodeTable + DeserializeOwned,
{
    serde_json::from_str(&code.to_string()).ok()
}

/// Every code in the table decodes to the variant with that code, and every
/// code outside it is rejected
fn check_table<T>(code: i64) -> Result<(), TestCaseError>
where
    T: CodeTable + DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
{
    let known = T::all().iter().copied().find(|v| i64::from(v.code()) == code);
    let decoded = decodes_code::<T>(code);
    prop_assert_eq!(decoded, known);

    if let Some(variant) = known {
        let encoded = serde_json::to_string(&variant).unwrap();
        prop_assert_eq!(encoded, format!("\"{}\"", variant.as_str()));
        let back: T = serde_json::from_str(&format!("\"{}\"", variant.as_str())).unwrap();
        prop_assert_eq!(back.code(), variant.code());
    }
    Ok(())
}

// ============================================================================
// Code table property tests
// ============================================================================

mod code_table_tests {
    use super::*;

    proptest! {
        #[test]
        fn system_status_table(code in -5i64..120) {
            check_table::<SystemStatus>(code)?;
        }

        #[test]
        fn stop_type_table(code in -5i64..120) {
            check_table::<StopType>(code)?;
        }

        #[test]
        fn route_type_table(code in -5i64..120) {
            check_table::<RouteType>(code)?;
        }

        #[test]
        fn continuous_policy_table(code in -5i64..120) {
            check_table::<ContinuousPolicy>(code)?;
        }

        #[test]
        fn alert_cause_table(code in -5i64..120) {
            check_table::<AlertCause>(code)?;
        }

        #[test]
        fn alert_effect_table(code in -5i64..120) {
            check_table::<AlertEffect>(code)?;
        }

        #[test]
        fn transfer_type_table(code in -5i64..120) {
            check_table::<TransferType>(code)?;
        }

        #[test]
        fn vehicle_status_table(code in -5i64..120) {
            check_table::<VehicleStatus>(code)?;
        }

        #[test]
        fn congestion_level_table(code in -5i64..120) {
            check_table::<CongestionLevel>(code)?;
        }

        #[test]
        fn occupancy_status_table(code in -5i64..120) {
            check_table::<OccupancyStatus>(code)?;
        }

        #[test]
        fn search_mode_table(code in -5i64..120) {
            check_table::<SearchMode>(code)?;
        }

        #[test]
        fn unknown_names_rejected(name in "[A-Z_]{1,24}") {
            prop_assume!(RouteType::from_name(&name).is_none());
            let json = format!("\"{name}\"");
            prop_assert!(serde_json::from_str::<RouteType>(&json).is_err());
        }

        #[test]
        fn lenient_parse_accepts_any_case(index in 0usize..11) {
            let variant = RouteType::all()[index];
            let lower = variant.as_str().to_ascii_lowercase().replace('_', "-");
            prop_assert_eq!(lower.parse::<RouteType>().unwrap(), variant);
        }
    }

    #[test]
    fn gaps_are_preserved() {
        for code in 8..=10 {
            assert!(decodes_code::<RouteType>(code).is_none());
        }
        assert!(decodes_code::<AlertCause>(1).is_none());
        assert!(decodes_code::<AlertEffect>(8).is_none());
        assert_eq!(decodes_code::<RouteType>(12), Some(RouteType::Monorail));
        assert_eq!(decodes_code::<RouteType>(100), Some(RouteType::Unknown));
    }
}

// ============================================================================
// Wire integer and coordinate property tests
// ============================================================================

mod wire_tests {
    use super::*;

    proptest! {
        #[test]
        fn page_cursor_survives(next in "[0-9A-Za-z]{1,12}") {
            let json = format!(r#"{{"stops": [], "next_id": "{next}"}}"#);
            let reply: ListStopsReply = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(reply.next_id, Some(next));
        }

        #[test]
        fn stop_coordinates_in_range_give_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let json = format!(r#"{{"id": "s", "latitude": {lat}, "longitude": {lon}}}"#);
            let stop: Stop = serde_json::from_str(&json).unwrap();
            let location = stop.location().unwrap();
            prop_assert!((location.latitude() - lat).abs() < 1e-9);
            prop_assert!((location.longitude() - lon).abs() < 1e-9);
        }

        #[test]
        fn out_of_range_latitude_rejected(
            lat in prop_oneof![(-1000.0f64..-90.1f64), (90.1f64..1000.0f64)],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -89.0f64..=89.0f64,
            lon1 in -179.0f64..=179.0f64,
            lat2 in -89.0f64..=89.0f64,
            lon2 in -179.0f64..=179.0f64
        ) {
            let a = GeoLocation::new(lat1, lon1).unwrap();
            let b = GeoLocation::new(lat2, lon2).unwrap();
            prop_assert!((a.distance_m(&b) - b.distance_m(&a)).abs() < 1e-6);
        }
    }
}
