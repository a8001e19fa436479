//! Typed query parameters for the list and get endpoints
//!
//! Each request type renders itself into ordered query pairs. Boolean flags
//! are always sent. Optional parameters that are unset are left out of the
//! query string entirely, since the server treats a missing parameter
//! differently from an empty one.

use domain::{CodeTable, GeoLocation, SearchMode, StopType};

/// Query pairs in the order they are sent
pub type QueryPairs = Vec<(&'static str, String)>;

/// Default page size for [`ListStopsRequest`]
pub const DEFAULT_STOP_LIMIT: u32 = 100;

/// Convert bool to "true"/"false" for query params
const fn bool_str(val: bool) -> &'static str {
    if val { "true" } else { "false" }
}

fn push_flag(pairs: &mut QueryPairs, key: &'static str, val: bool) {
    pairs.push((key, bool_str(val).to_string()));
}

/// Parameters of `GET /systems/{system}/stops`
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct ListStopsRequest {
    pub search_mode: SearchMode,
    pub only_return_specified_ids: bool,
    pub filter_by_id: bool,
    pub id: Option<String>,
    pub filter_by_type: bool,
    pub stop_type: Option<StopType>,
    /// Pagination cursor, taken from a previous reply's `next_id`
    pub first_id: Option<String>,
    pub limit: u32,
    pub skip_stop_times: bool,
    pub skip_service_maps: bool,
    pub skip_alerts: bool,
    pub skip_transfers: bool,
    /// Kilometres, only meaningful with [`SearchMode::Distance`]
    pub max_distance: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for ListStopsRequest {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::Id,
            only_return_specified_ids: false,
            filter_by_id: false,
            id: None,
            filter_by_type: false,
            stop_type: None,
            first_id: None,
            limit: DEFAULT_STOP_LIMIT,
            skip_stop_times: false,
            skip_service_maps: false,
            skip_alerts: false,
            skip_transfers: false,
            max_distance: None,
            latitude: None,
            longitude: None,
        }
    }
}

impl ListStopsRequest {
    /// Restrict the listing to a single stop id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self.filter_by_id = true;
        self.only_return_specified_ids = true;
        self
    }

    /// Restrict the listing to stops of one type
    #[must_use]
    pub fn with_type(mut self, stop_type: StopType) -> Self {
        self.stop_type = Some(stop_type);
        self.filter_by_type = true;
        self
    }

    /// Search by distance from a point instead of by id
    #[must_use]
    pub fn near(mut self, location: GeoLocation, max_distance: Option<f64>) -> Self {
        self.search_mode = SearchMode::Distance;
        self.latitude = Some(location.latitude());
        self.longitude = Some(location.longitude());
        self.max_distance = max_distance;
        self
    }

    /// Continue after a previous page
    #[must_use]
    pub fn after(mut self, next_id: impl Into<String>) -> Self {
        self.first_id = Some(next_id.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Skip every expensive section of the response
    #[must_use]
    pub fn skip_all(mut self) -> Self {
        self.skip_stop_times = true;
        self.skip_service_maps = true;
        self.skip_alerts = true;
        self.skip_transfers = true;
        self
    }

    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("search_mode", self.search_mode.as_str().to_string())];
        push_flag(&mut pairs, "only_return_specified_ids", self.only_return_specified_ids);
        push_flag(&mut pairs, "filter_by_id", self.filter_by_id);
        if let Some(id) = &self.id {
            pairs.push(("id", id.clone()));
        }
        push_flag(&mut pairs, "filter_by_type", self.filter_by_type);
        if let Some(stop_type) = self.stop_type {
            pairs.push(("type", stop_type.as_str().to_string()));
        }
        if let Some(first_id) = &self.first_id {
            pairs.push(("first_id", first_id.clone()));
        }
        pairs.push(("limit", self.limit.to_string()));
        push_flag(&mut pairs, "skip_stop_times", self.skip_stop_times);
        push_flag(&mut pairs, "skip_service_maps", self.skip_service_maps);
        push_flag(&mut pairs, "skip_alerts", self.skip_alerts);
        push_flag(&mut pairs, "skip_transfers", self.skip_transfers);
        if let Some(max_distance) = self.max_distance {
            pairs.push(("max_distance", max_distance.to_string()));
        }
        if let Some(latitude) = self.latitude {
            pairs.push(("latitude", latitude.to_string()));
        }
        if let Some(longitude) = self.longitude {
            pairs.push(("longitude", longitude.to_string()));
        }
        pairs
    }
}

/// Parameters of `GET /systems/{system}/stops/{stop}`
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetStopRequest {
    pub skip_stop_times: bool,
    pub skip_service_maps: bool,
    pub skip_alerts: bool,
    pub skip_transfers: bool,
}

impl GetStopRequest {
    #[must_use]
    pub const fn skip_stop_times(mut self, skip: bool) -> Self {
        self.skip_stop_times = skip;
        self
    }

    #[must_use]
    pub const fn skip_service_maps(mut self, skip: bool) -> Self {
        self.skip_service_maps = skip;
        self
    }

    #[must_use]
    pub const fn skip_alerts(mut self, skip: bool) -> Self {
        self.skip_alerts = skip;
        self
    }

    #[must_use]
    pub const fn skip_transfers(mut self, skip: bool) -> Self {
        self.skip_transfers = skip;
        self
    }

    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::with_capacity(4);
        push_flag(&mut pairs, "skip_stop_times", self.skip_stop_times);
        push_flag(&mut pairs, "skip_service_maps", self.skip_service_maps);
        push_flag(&mut pairs, "skip_alerts", self.skip_alerts);
        push_flag(&mut pairs, "skip_transfers", self.skip_transfers);
        pairs
    }
}

/// Parameters shared by `GET /systems/{system}/routes` and
/// `GET /systems/{system}/routes/{route}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteRequest {
    pub skip_estimated_headways: bool,
    pub skip_service_maps: bool,
    pub skip_alerts: bool,
}

impl RouteRequest {
    #[must_use]
    pub const fn skip_estimated_headways(mut self, skip: bool) -> Self {
        self.skip_estimated_headways = skip;
        self
    }

    #[must_use]
    pub const fn skip_service_maps(mut self, skip: bool) -> Self {
        self.skip_service_maps = skip;
        self
    }

    #[must_use]
    pub const fn skip_alerts(mut self, skip: bool) -> Self {
        self.skip_alerts = skip;
        self
    }

    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::with_capacity(3);
        push_flag(&mut pairs, "skip_estimated_headways", self.skip_estimated_headways);
        push_flag(&mut pairs, "skip_service_maps", self.skip_service_maps);
        push_flag(&mut pairs, "skip_alerts", self.skip_alerts);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pairs: &QueryPairs) -> Vec<&'static str> {
        pairs.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_bool_str() {
        assert_eq!(bool_str(true), "true");
        assert_eq!(bool_str(false), "false");
    }

    #[test]
    fn default_stops_omit_unset_optionals() {
        let pairs = ListStopsRequest::default().query_pairs();
        assert_eq!(
            keys(&pairs),
            [
                "search_mode",
                "only_return_specified_ids",
                "filter_by_id",
                "filter_by_type",
                "limit",
                "skip_stop_times",
                "skip_service_maps",
                "skip_alerts",
                "skip_transfers",
            ]
        );
        assert!(pairs.contains(&("search_mode", "ID".to_string())));
        assert!(pairs.contains(&("limit", "100".to_string())));
        assert!(pairs.contains(&("skip_stop_times", "false".to_string())));
    }

    #[test]
    fn full_stops_keep_declared_order() {
        let location = GeoLocation::new(40.7527, -73.9772).unwrap();
        let request = ListStopsRequest::default()
            .with_id("631")
            .with_type(StopType::Station)
            .after("600")
            .near(location, Some(1.5));
        assert_eq!(
            keys(&request.query_pairs()),
            [
                "search_mode",
                "only_return_specified_ids",
                "filter_by_id",
                "id",
                "filter_by_type",
                "type",
                "first_id",
                "limit",
                "skip_stop_times",
                "skip_service_maps",
                "skip_alerts",
                "skip_transfers",
                "max_distance",
                "latitude",
                "longitude",
            ]
        );
    }

    #[test]
    fn distance_search_values() {
        let location = GeoLocation::new(40.7527, -73.9772).unwrap();
        let pairs = ListStopsRequest::default().near(location, None).query_pairs();
        assert!(pairs.contains(&("search_mode", "DISTANCE".to_string())));
        assert!(pairs.contains(&("latitude", "40.7527".to_string())));
        assert!(pairs.contains(&("longitude", "-73.9772".to_string())));
        assert!(!keys(&pairs).contains(&"max_distance"));
    }

    #[test]
    fn type_filter_sent_by_name() {
        let pairs = ListStopsRequest::default()
            .with_type(StopType::EntranceOrExit)
            .query_pairs();
        assert!(pairs.contains(&("filter_by_type", "true".to_string())));
        assert!(pairs.contains(&("type", "ENTRANCE_OR_EXIT".to_string())));
    }

    #[test]
    fn get_stop_flags_always_present() {
        let pairs = GetStopRequest::default().skip_alerts(true).query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("skip_stop_times", "false".to_string()),
                ("skip_service_maps", "false".to_string()),
                ("skip_alerts", "true".to_string()),
                ("skip_transfers", "false".to_string()),
            ]
        );
    }

    #[test]
    fn route_flags_always_present() {
        let pairs = RouteRequest::default().skip_alerts(true).query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("skip_estimated_headways", "false".to_string()),
                ("skip_service_maps", "false".to_string()),
                ("skip_alerts", "true".to_string()),
            ]
        );
    }
}
