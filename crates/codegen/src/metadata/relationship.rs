//! Relationship metadata derived from foreign keys.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Multiplicity of one navigation role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// Exactly one
    One,
    /// Zero or one
    ZeroOrOne,
    /// A collection
    Many,
}

impl Cardinality {
    /// Whether the navigation holds a collection
    pub fn is_collection(self) -> bool {
        matches!(self, Self::Many)
    }
}

/// One directed navigation role between two entities.
///
/// Every foreign key produces exactly two of these, one per side,
/// cross-referencing each other's navigation name and cardinality once
/// resolution completes. A relationship is never left half-populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Stable relationship name: the constraint name or a synthesized one
    pub name: String,
    /// Whether this side owns the foreign key columns
    pub is_foreign_key: bool,
    /// Multiplicity of this navigation
    pub cardinality: Cardinality,
    /// Navigation member name on the owning entity
    pub property_name: String,

    /// The entity on the other side of the navigation
    pub principal_entity: EntityId,
    /// Key member names on the owning entity, in key order
    pub properties: Vec<String>,
    /// Key member names on the other side's entity, in key order
    pub principal_properties: Vec<String>,

    /// The counterpart's navigation member name
    pub principal_property_name: String,
    /// The counterpart's cardinality
    pub principal_cardinality: Cardinality,
}

impl Relationship {
    /// Create an unresolved record for the given name and side
    pub fn new(name: impl Into<String>, is_foreign_key: bool, principal_entity: EntityId) -> Self {
        Self {
            name: name.into(),
            is_foreign_key,
            cardinality: Cardinality::ZeroOrOne,
            property_name: String::new(),
            principal_entity,
            properties: Vec::new(),
            principal_properties: Vec::new(),
            principal_property_name: String::new(),
            principal_cardinality: Cardinality::ZeroOrOne,
        }
    }
}
