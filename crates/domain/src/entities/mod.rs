//! Entities - the records served by the Transiter API
//!
//! Optional wire fields are `Option`s and repeated fields default to empty,
//! so a sparse payload decodes as long as the identifying fields are there.
//! Unknown fields are ignored.

mod agency;
mod alert;
mod feed;
mod resource;
mod route;
mod shape;
mod stop;
mod stop_time;
mod system;
mod transfer;
mod trip;
mod vehicle;

pub use agency::{Agency, AgencyReference};
pub use alert::{ActivePeriod, Alert, AlertReference, AlertText};
pub use feed::{Feed, FeedReference};
pub use resource::{ChildResources, Resource};
pub use route::{Route, RouteReference, RouteServiceMap};
pub use shape::{Shape, ShapePoint, ShapeReference};
pub use stop::{HeadsignRule, Stop, StopReference, StopServiceMap};
pub use stop_time::{EstimatedTime, StopTime};
pub use system::{System, SystemReference};
pub use transfer::Transfer;
pub use trip::{Trip, TripReference};
pub use vehicle::{Vehicle, VehicleReference};

/// Convert upstream unix seconds into a UTC timestamp
pub(crate) fn unix_to_utc(seconds: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(seconds, 0)
}
