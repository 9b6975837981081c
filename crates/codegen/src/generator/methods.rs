//! Lookup method derivation.
//!
//! Methods describe the query accessors an entity should expose: one
//! for the primary key, one per index, and one per foreign key column.
//! Duplicates collapse on the derived suffix so a foreign key column
//! that is also indexed produces a single method.

use tracing::warn;

use modelgen_core::schema::TableSchema;

use crate::metadata::{Entity, EntityId, Method, SchemaContext};

use super::ModelGenerator;

impl ModelGenerator<'_> {
    pub(super) fn create_methods(
        &mut self,
        context: &mut SchemaContext,
        id: EntityId,
        table: &TableSchema,
    ) {
        let entity = context.entity(id);
        let mut methods: Vec<Method> = Vec::new();

        if let Some(primary_key) = &table.primary_key {
            if let Some(mut method) = method_from_columns(
                entity,
                &primary_key.columns,
                primary_key.name.as_deref().unwrap_or("<primary key>"),
            ) {
                method.is_key = true;
                method.source_name = primary_key.name.clone();
                push_method(&mut methods, method);
            }
        }

        for index in &table.indexes {
            if let Some(mut method) = method_from_columns(
                entity,
                &index.columns,
                index.name.as_deref().unwrap_or("<index>"),
            ) {
                method.is_index = true;
                method.is_unique = index.is_unique;
                method.source_name = index.name.clone();
                push_method(&mut methods, method);
            }
        }

        for foreign_key in &table.foreign_keys {
            let source = foreign_key.name.as_deref().unwrap_or("<foreign key>");
            // each column singly; composite keys do not get a combined method
            for column in &foreign_key.columns {
                if let Some(mut method) =
                    method_from_columns(entity, std::slice::from_ref(column), source)
                {
                    method.source_name = foreign_key.name.clone();
                    push_method(&mut methods, method);
                }
            }
        }

        let entity = context.entity_mut(id);
        entity.methods = methods;
        entity.methods_processed = true;
    }
}

fn method_from_columns(entity: &Entity, columns: &[String], source: &str) -> Option<Method> {
    let mut properties: Vec<String> = Vec::new();

    for column in columns {
        match entity.property_by_column(column) {
            Some(property) => properties.push(property.property_name.clone()),
            None => warn!(
                column = %column,
                source = %source,
                entity = %entity.entity_name,
                "could not find column for lookup method"
            ),
        }
    }

    if properties.is_empty() {
        return None;
    }

    let suffix = properties.concat();

    Some(Method {
        suffix,
        source_name: None,
        is_key: false,
        is_index: false,
        is_unique: false,
        properties,
    })
}

fn push_method(methods: &mut Vec<Method>, method: Method) {
    if methods.iter().any(|m| m.suffix == method.suffix) {
        return;
    }
    methods.push(method);
}
