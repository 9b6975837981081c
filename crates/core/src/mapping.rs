//! Store-type mapping.
//!
//! The transformation engine resolves every column's store type through
//! a [`TypeMappingSource`]. Columns whose store type has no mapping are
//! skipped with a warning rather than failing the run.

use serde::{Deserialize, Serialize};

/// Value type of a generated member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Bool,
    I16,
    I32,
    I64,
    U64,
    F32,
    F64,
    Decimal,
    #[default]
    String,
    Bytes,
    DateTime,
    Date,
    Time,
    Uuid,
    Json,
}

/// A resolved mapping from a store type to a generated member type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMapping {
    /// Full store type as requested, e.g. `varchar(256)`
    pub store_type: String,
    /// Base store type name without size arguments, e.g. `varchar`
    pub native_type: String,
    /// Generated member value type
    pub value_type: ValueType,
    /// Size argument parsed from the store type, when present
    pub size: Option<u32>,
}

/// Source of store-type mappings consumed by the entity builder
pub trait TypeMappingSource {
    /// Resolve a mapping for the given store type, or `None` when the
    /// type is not representable
    fn find_mapping(&self, store_type: &str) -> Option<TypeMapping>;
}

/// Default mapper covering common SQL store types
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlTypeMapper;

impl SqlTypeMapper {
    fn value_type(native: &str) -> Option<ValueType> {
        let value_type = match native {
            "bit" | "bool" | "boolean" => ValueType::Bool,
            "smallint" | "int2" => ValueType::I16,
            "int" | "integer" | "int4" | "serial" => ValueType::I32,
            "bigint" | "int8" | "bigserial" => ValueType::I64,
            "real" | "float4" => ValueType::F32,
            "float" | "double precision" | "float8" => ValueType::F64,
            "decimal" | "numeric" | "money" | "smallmoney" => ValueType::Decimal,
            "char" | "nchar" | "varchar" | "nvarchar" | "text" | "ntext" | "citext"
            | "character" | "character varying" | "xml" => ValueType::String,
            "binary" | "varbinary" | "image" | "bytea" | "rowversion" | "timestamp" => {
                ValueType::Bytes
            }
            "datetime" | "datetime2" | "smalldatetime" | "datetimeoffset" | "timestamptz"
            | "timestamp with time zone" | "timestamp without time zone" => ValueType::DateTime,
            "date" => ValueType::Date,
            "time" | "time with time zone" | "time without time zone" => ValueType::Time,
            "uniqueidentifier" | "uuid" => ValueType::Uuid,
            "json" | "jsonb" => ValueType::Json,
            _ => return None,
        };

        Some(value_type)
    }
}

impl TypeMappingSource for SqlTypeMapper {
    fn find_mapping(&self, store_type: &str) -> Option<TypeMapping> {
        let trimmed = store_type.trim();
        let (native, args) = match trimmed.find('(') {
            Some(open) => {
                let close = trimmed.rfind(')')?;
                (trimmed[..open].trim(), Some(&trimmed[open + 1..close]))
            }
            None => (trimmed, None),
        };

        let native = native.to_ascii_lowercase();
        let value_type = Self::value_type(&native)?;

        // first argument is the size; "max" and precision pairs have none
        let size = args
            .and_then(|a| a.split(',').next())
            .and_then(|a| a.trim().parse::<u32>().ok())
            .filter(|_| matches!(value_type, ValueType::String | ValueType::Bytes));

        Some(TypeMapping {
            store_type: trimmed.to_string(),
            native_type: native,
            value_type,
            size,
        })
    }
}
