//! Table, key, and index descriptions within an introspected database.

use serde::{Deserialize, Serialize};

use super::ColumnSchema;

/// One table or view of an introspected database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Schema (owner) name, when the store has one
    pub schema: Option<String>,
    /// Table name
    pub name: String,
    /// Whether this is a view rather than a table
    pub is_view: bool,
    /// Columns in store order
    pub columns: Vec<ColumnSchema>,
    /// Primary key, when present
    pub primary_key: Option<PrimaryKeySchema>,
    /// Foreign keys in store order
    pub foreign_keys: Vec<ForeignKeySchema>,
    /// Unique constraints
    pub unique_constraints: Vec<UniqueConstraintSchema>,
    /// Indexes
    pub indexes: Vec<IndexSchema>,
    /// Temporal (system-versioned) annotations, when present
    pub temporal: Option<TemporalSchema>,
}

impl TableSchema {
    /// Create an empty table with the given name and optional schema
    pub fn new(name: impl Into<String>, schema: Option<&str>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Fully qualified `schema.table` name used for filtering
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }
}

/// Primary key of a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKeySchema {
    /// Constraint name, when the store reports one
    pub name: Option<String>,
    /// Key columns in order
    pub columns: Vec<String>,
}

/// A foreign key constraint.
///
/// The principal table is referenced by name and resolved against the
/// owning [`DatabaseSchema`](super::DatabaseSchema) during transformation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeySchema {
    /// Constraint name; unnamed constraints get a synthesized name later
    pub name: Option<String>,
    /// Foreign-side columns in order
    pub columns: Vec<String>,
    /// Schema of the referenced table
    pub principal_schema: Option<String>,
    /// Name of the referenced table
    pub principal_table: String,
    /// Referenced columns in order, matching `columns` positionally
    pub principal_columns: Vec<String>,
}

/// A unique constraint on a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniqueConstraintSchema {
    /// Constraint name, when the store reports one
    pub name: Option<String>,
    /// Constrained columns in order
    pub columns: Vec<String>,
}

/// An index on a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexSchema {
    /// Index name, when the store reports one
    pub name: Option<String>,
    /// Indexed columns in order
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness
    pub is_unique: bool,
}

/// System-versioned (temporal) table annotations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalSchema {
    /// History table name
    pub history_table: Option<String>,
    /// History table schema
    pub history_schema: Option<String>,
    /// Period start column name
    pub period_start_column: Option<String>,
    /// Period start property name, when the store distinguishes it
    pub period_start_property: Option<String>,
    /// Period end column name
    pub period_end_column: Option<String>,
    /// Period end property name, when the store distinguishes it
    pub period_end_property: Option<String>,
}

impl TemporalSchema {
    /// Resolved period start column, falling back to the property name
    pub fn start_column(&self) -> Option<&str> {
        self.period_start_column
            .as_deref()
            .or(self.period_start_property.as_deref())
    }

    /// Resolved period end column, falling back to the property name
    pub fn end_column(&self) -> Option<&str> {
        self.period_end_column
            .as_deref()
            .or(self.period_end_property.as_deref())
    }
}
