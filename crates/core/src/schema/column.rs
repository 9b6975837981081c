//! Column description within an introspected table.

use serde::{Deserialize, Serialize};

/// How the store generates a column value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueGenerated {
    /// Generated when a row is inserted
    OnAdd,
    /// Generated on insert and on every update
    OnAddOrUpdate,
}

/// One column of an introspected table or view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name as it appears in the store
    pub name: String,
    /// Full store type, e.g. `varchar(256)` or `decimal(18,2)`
    pub store_type: String,
    /// Whether the column accepts NULL
    pub is_nullable: bool,
    /// Literal default value, if any
    pub default_value: Option<String>,
    /// SQL expression form of the default, if any
    pub default_sql: Option<String>,
    /// SQL expression for computed columns
    pub computed_sql: Option<String>,
    /// Value generation marker reported by the store
    pub value_generated: Option<ValueGenerated>,
    /// Whether the column is an automatic row version
    pub is_row_version: bool,
    /// Whether the column is used as a concurrency token
    pub is_concurrency_token: bool,
}

impl ColumnSchema {
    /// Create a column with the given name and store type
    pub fn new(name: impl Into<String>, store_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store_type: store_type.into(),
            ..Default::default()
        }
    }

    /// Mark the column as nullable
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Mark the column as a row version
    pub fn row_version(mut self) -> Self {
        self.is_row_version = true;
        self
    }
}
