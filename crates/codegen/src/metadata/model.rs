//! Model projection metadata.

use serde::{Deserialize, Serialize};

/// Purpose of a model projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    Read,
    Create,
    Update,
    Search,
}

/// A named companion type (mapper or validator) paired with an entity's
/// model projections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Generated type name, unique within its namespace
    pub name: String,
    /// Namespace of the generated type
    pub namespace: String,
    /// Base type, when configured
    pub base_type: Option<String>,
}

/// One projection of an entity for a single purpose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Projection purpose
    pub kind: ModelKind,
    /// Generated type name, unique within its namespace
    pub name: String,
    /// Namespace of the generated type
    pub namespace: String,
    /// Base type, when configured
    pub base_type: Option<String>,
    /// Attributes attached to the generated type
    pub attributes: Vec<String>,
    /// Included member names, in entity property order
    pub properties: Vec<String>,
    /// Name of the entity's shared mapper descriptor
    pub mapper_name: String,
    /// Name of the entity's shared validator descriptor
    pub validator_name: String,
}
