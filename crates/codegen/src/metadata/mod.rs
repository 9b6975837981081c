//! Generation metadata graph.
//!
//! The output of a transformation run: one [`SchemaContext`] owning
//! every [`Entity`] discovered, with cross-entity references expressed
//! as [`EntityId`] indexes into the context rather than deep copies.

mod context;
mod endpoint;
mod entity;
mod method;
mod model;
mod property;
mod relationship;

pub use context::{EntityId, SchemaContext};
pub use endpoint::{Endpoint, EndpointKind};
pub use entity::{Entity, TemporalEntity};
pub use method::Method;
pub use model::{Descriptor, Model, ModelKind};
pub use property::Property;
pub use relationship::{Cardinality, Relationship};
