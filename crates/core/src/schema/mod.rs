//! Raw database schema description.
//!
//! These types are the read-only input contract produced by the
//! database introspection layer. The transformation engine never
//! mutates them; it walks tables in the order they appear here so the
//! generated output is stable across repeated runs.

mod column;
mod table;

pub use column::{ColumnSchema, ValueGenerated};
pub use table::{
    ForeignKeySchema, IndexSchema, PrimaryKeySchema, TableSchema, TemporalSchema,
    UniqueConstraintSchema,
};

use serde::{Deserialize, Serialize};

/// An introspected database: the complete input for one generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Name of the source database
    pub database_name: String,
    /// Tables and views in introspection order
    pub tables: Vec<TableSchema>,
}

impl DatabaseSchema {
    /// Create an empty schema for the given database
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            tables: Vec::new(),
        }
    }

    /// Find a table by name and optional schema name
    pub fn table(&self, name: &str, schema: Option<&str>) -> Option<&TableSchema> {
        self.tables
            .iter()
            .find(|t| t.name == name && t.schema.as_deref() == schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup_by_schema() {
        let mut schema = DatabaseSchema::new("Tracker");
        schema.tables.push(TableSchema::new("User", Some("dbo")));
        schema.tables.push(TableSchema::new("User", Some("audit")));

        let table = schema.table("User", Some("audit")).unwrap();
        assert_eq!(table.schema.as_deref(), Some("audit"));
        assert!(schema.table("User", None).is_none());
        assert!(schema.table("Missing", Some("dbo")).is_none());
    }
}
