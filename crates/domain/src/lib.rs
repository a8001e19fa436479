//! Domain layer for trainsnow
//!
//! Typed representations of the entities served by a
//! [Transiter](https://docs.transiter.dev) instance: systems, agencies,
//! stops, routes and everything they embed.
//!
//! Every entity is an immutable value decoded fresh from a JSON response.
//! Entities that get embedded in other entities also have a slim
//! `*Reference` shape carrying only the id and a few display fields. The
//! two shapes are distinct types and are never converted into one another.
//!
//! Enumerations are decoded through explicit code tables (see
//! [`CodeTable`]) because the upstream codes contain gaps. Decoding an
//! unknown name or code fails instead of falling back to a default.

pub mod entities;
pub mod errors;
pub mod replies;
pub mod value_objects;
pub mod wire;

pub use entities::*;
pub use errors::DomainError;
pub use replies::{ListAgenciesReply, ListRoutesReply, ListStopsReply, ListSystemsReply};
pub use value_objects::*;

/// Access to the identifier shared by a full entity and its reference shape
pub trait Identified {
    /// The upstream identifier
    fn id(&self) -> &str;
}
