//! Core contracts for the modelgen code generator.
//!
//! Defines the raw database schema description consumed by the
//! transformation engine, the store-type mapping seam, the typed
//! configuration structs, and the shared error type.

pub mod error;
pub mod mapping;
pub mod options;
pub mod schema;

pub use error::{GeneratorError, GeneratorResult};
pub use mapping::{SqlTypeMapper, TypeMapping, TypeMappingSource, ValueType};
pub use options::GeneratorOptions;
pub use schema::{
    ColumnSchema, DatabaseSchema, ForeignKeySchema, IndexSchema, PrimaryKeySchema, TableSchema,
    TemporalSchema, UniqueConstraintSchema, ValueGenerated,
};
