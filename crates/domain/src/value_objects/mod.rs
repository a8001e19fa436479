//! Value Objects - Immutable, identity-less domain primitives
//!
//! Mostly the code-table enumerations shared by the entities, plus the
//! coordinate pair used for geographic stop searches.

mod alert_cause;
mod alert_effect;
mod code_table;
mod congestion_level;
mod continuous_policy;
mod geo_location;
mod occupancy_status;
mod route_type;
mod search_mode;
mod stop_type;
mod system_status;
mod transfer_type;
mod vehicle_status;

pub use alert_cause::AlertCause;
pub use alert_effect::AlertEffect;
pub use code_table::CodeTable;
pub use congestion_level::CongestionLevel;
pub use continuous_policy::ContinuousPolicy;
pub use geo_location::GeoLocation;
pub use occupancy_status::OccupancyStatus;
pub use route_type::RouteType;
pub use search_mode::SearchMode;
pub use stop_type::StopType;
pub use system_status::SystemStatus;
pub use transfer_type::TransferType;
pub use vehicle_status::VehicleStatus;
