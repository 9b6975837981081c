//! Include/exclude filter evaluation.
//!
//! Precedence is fixed: a matching include pattern wins over any
//! exclude pattern, a matching exclude pattern excludes, and elements
//! matching nothing are included. Projection-level decisions evaluate
//! the union of the shared pattern sets and the projection's own.

use modelgen_core::options::{DatabaseOptions, MatchPattern, ProjectionOptions, SharedModelOptions};
use modelgen_core::schema::TableSchema;

/// Evaluate the include/exclude precedence for a qualified name
pub fn is_ignored<'a>(
    name: &str,
    includes: impl IntoIterator<Item = &'a MatchPattern>,
    excludes: impl IntoIterator<Item = &'a MatchPattern>,
) -> bool {
    for pattern in includes {
        if pattern.is_match(name) {
            return false;
        }
    }

    for pattern in excludes {
        if pattern.is_match(name) {
            return true;
        }
    }

    false
}

/// Whether a table is excluded from the run entirely
pub fn is_table_ignored(table: &TableSchema, options: &DatabaseOptions) -> bool {
    is_ignored(&table.qualified_name(), &options.include, &options.exclude)
}

/// Whether an entity is excluded from one model projection
pub fn is_entity_ignored<P: ProjectionOptions + ?Sized>(
    entity_name: &str,
    options: &P,
    shared: &SharedModelOptions,
) -> bool {
    is_ignored(
        entity_name,
        shared.include.entities.iter().chain(&options.include().entities),
        shared.exclude.entities.iter().chain(&options.exclude().entities),
    )
}

/// Whether a property is excluded from one model projection
pub fn is_property_ignored<P: ProjectionOptions + ?Sized>(
    entity_name: &str,
    property_name: &str,
    options: &P,
    shared: &SharedModelOptions,
) -> bool {
    let name = format!("{}.{}", entity_name, property_name);
    is_ignored(
        &name,
        shared
            .include
            .properties
            .iter()
            .chain(&options.include().properties),
        shared
            .exclude
            .properties
            .iter()
            .chain(&options.exclude().properties),
    )
}
