//! Entity generation options: naming policies and rename rules.

use serde::{Deserialize, Serialize};

/// Naming convention applied to generated entity type names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityNaming {
    /// Keep the table name as-is
    Preserve,
    /// Singularize plural table names
    #[default]
    Singular,
    /// Pluralize singular table names
    Plural,
}

/// Naming policy for collection navigation members on the principal side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipNaming {
    /// Keep the computed name as-is
    Preserve,
    /// Append a `List` suffix
    Suffix,
    /// Pluralize the name
    #[default]
    Plural,
}

/// Naming policy for the entity set (collection accessor) name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetNaming {
    /// Keep the entity name as-is
    Preserve,
    /// Append a `DataSet` suffix
    Suffix,
    /// Pluralize the entity name
    #[default]
    Plural,
}

/// Regex-based rename rules applied to derived names.
///
/// Each expression is removed from the candidate name. A rule that would
/// strip a name to nothing is ignored for that name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamingOptions {
    /// Expressions removed from entity type names
    pub entities: Vec<String>,
    /// Expressions removed from property member names
    pub properties: Vec<String>,
}

/// Options for generated entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityOptions {
    /// Explicit entity type name template; `{entity}` expands to the
    /// derived name. Overrides schema-prefix derivation when set.
    pub name: Option<String>,
    /// Namespace for generated entities
    pub namespace: String,
    /// Base type generated entities derive from
    pub base_type: Option<String>,
    /// Naming convention for entity type names
    pub entity_naming: EntityNaming,
    /// Naming policy for collection navigation members
    pub relationship_naming: RelationshipNaming,
    /// Naming policy for entity set names
    pub set_naming: SetNaming,
    /// Prefix entity type names with the table schema name
    pub prefix_with_schema_name: bool,
    /// Rename rules for entities and properties
    pub renaming: RenamingOptions,
}

impl Default for EntityOptions {
    fn default() -> Self {
        Self {
            name: None,
            namespace: "Data.Entities".to_string(),
            base_type: None,
            entity_naming: EntityNaming::default(),
            relationship_naming: RelationshipNaming::default(),
            set_naming: SetNaming::default(),
            prefix_with_schema_name: false,
            renaming: RenamingOptions::default(),
        }
    }
}
