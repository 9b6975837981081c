//! Generated entity metadata.

use serde::{Deserialize, Serialize};

use super::{Descriptor, Endpoint, Method, Model, Property, Relationship};

/// Temporal-table metadata carried by a generated entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalEntity {
    /// History table name
    pub history_table: Option<String>,
    /// History table schema
    pub history_schema: Option<String>,
    /// Period start column name
    pub start_column: Option<String>,
    /// Generated member name for the period start
    pub start_property: Option<String>,
    /// Period end column name
    pub end_column: Option<String>,
    /// Generated member name for the period end
    pub end_property: Option<String>,
}

/// One generated entity, derived from a table or view.
///
/// Source identity (table name + schema) is immutable for the run; all
/// other fields are derived. The `*_processed` flags make every build
/// phase idempotent so the table graph can be walked re-entrantly,
/// including across foreign-key cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Source table name
    pub table_name: String,
    /// Source table schema
    pub table_schema: Option<String>,
    /// Whether the source is a view
    pub is_view: bool,

    /// Generated type name, unique across the run
    pub entity_name: String,
    /// Namespace of the generated type
    pub namespace: String,
    /// Base type of the generated entity
    pub base_type: Option<String>,
    /// Collection accessor name, unique across the run
    pub set_name: String,
    /// Temporal metadata when the source is a system-versioned table
    pub temporal: Option<TemporalEntity>,

    /// Properties in source column order
    pub properties: Vec<Property>,
    /// Relationships in source foreign-key order
    pub relationships: Vec<Relationship>,
    /// Lookup-method descriptors
    pub methods: Vec<Method>,
    /// Model projections
    pub models: Vec<Model>,
    /// Endpoint descriptors
    pub endpoints: Vec<Endpoint>,

    /// Mapper descriptor, shared by all of the entity's models
    pub mapper: Option<Descriptor>,
    /// Validator descriptor, shared by all of the entity's models
    pub validator: Option<Descriptor>,

    pub properties_processed: bool,
    pub relationships_processed: bool,
    pub methods_processed: bool,
    pub models_processed: bool,
    pub endpoints_processed: bool,
}

impl Entity {
    /// Create an entity shell for the given table identity
    pub fn new(table_name: impl Into<String>, table_schema: Option<&str>) -> Self {
        Self {
            table_name: table_name.into(),
            table_schema: table_schema.map(str::to_string),
            ..Default::default()
        }
    }

    /// Find a property by source column name
    pub fn property_by_column(&self, column: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.column_name == column)
    }

    /// Find a property by generated member name (case-insensitive)
    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.property_name.eq_ignore_ascii_case(name))
    }

    /// Find a model projection by kind
    pub fn model(&self, kind: super::ModelKind) -> Option<&Model> {
        self.models.iter().find(|m| m.kind == kind)
    }
}
