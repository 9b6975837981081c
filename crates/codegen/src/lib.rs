//! Schema-to-model transformation engine.
//!
//! Turns a raw database schema description into a normalized,
//! cross-referenced graph of generated artifacts: entities with their
//! properties, bidirectional relationships inferred from foreign keys,
//! lookup-method descriptors, model projections, and endpoint
//! descriptors. File output and template rendering are downstream
//! concerns; this crate only builds the object graph.

pub mod filter;
pub mod generator;
pub mod metadata;
pub mod naming;

pub use generator::ModelGenerator;
pub use metadata::{
    Cardinality, Descriptor, Endpoint, EndpointKind, Entity, EntityId, Method, Model, ModelKind,
    Property, Relationship, SchemaContext, TemporalEntity,
};
pub use naming::NameRegistry;
