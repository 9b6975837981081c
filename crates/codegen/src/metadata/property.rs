//! Generated property metadata.

use modelgen_core::mapping::ValueType;
use modelgen_core::schema::ValueGenerated;
use serde::{Deserialize, Serialize};

/// One generated member, derived from a column or synthesized (for
/// example a temporal period boundary with no ordinary column).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Source column name; key within the owning entity
    pub column_name: String,
    /// Generated member name, unique within the entity
    pub property_name: String,

    /// Whether the member is optional
    pub is_nullable: bool,
    /// Whether the column is part of the primary key
    pub is_primary_key: bool,
    /// Whether the column participates in any foreign key
    pub is_foreign_key: bool,
    /// Whether the column participates in a unique constraint or index
    pub is_unique: bool,
    /// Whether the column is a concurrency token
    pub is_concurrency_token: bool,
    /// Whether the column is an automatic row version
    pub is_row_version: bool,

    /// Literal default value
    pub default_value: Option<String>,
    /// SQL expression default
    pub default_sql: Option<String>,
    /// Store-side value generation policy
    pub value_generated: Option<ValueGenerated>,

    /// Full store type, e.g. `nvarchar(256)`
    pub store_type: String,
    /// Base store type name, e.g. `nvarchar`
    pub native_type: String,
    /// Generated member value type
    pub value_type: ValueType,
    /// Size parsed from the store type
    pub size: Option<u32>,
}

impl Property {
    /// Whether the member must always carry a value
    pub fn is_required(&self) -> bool {
        !self.is_nullable
    }
}
