//! The schema-to-model transformation engine.
//!
//! Tables are processed in input order; the entity builder is invoked
//! per table and recursively from the relationship resolver when a
//! foreign key leads to an entity that has not been discovered yet.
//! Cycles in the foreign-key graph are broken by the per-phase
//! processed flags on each entity, not by explicit cycle detection.

mod endpoints;
mod methods;
mod models;
mod relationships;

use regex::Regex;
use tracing::{debug, info, warn};

use modelgen_core::error::{GeneratorError, GeneratorResult};
use modelgen_core::mapping::{TypeMappingSource, ValueType};
use modelgen_core::options::{EntityNaming, GeneratorOptions, RowVersionMapping, SetNaming, TableNaming};
use modelgen_core::schema::{DatabaseSchema, TableSchema, ValueGenerated};

use crate::filter;
use crate::metadata::{Entity, EntityId, Property, SchemaContext, TemporalEntity};
use crate::naming::{self, NameRegistry};

/// Builds the generation metadata graph from a raw database schema.
///
/// One generator serves one run; the [`NameRegistry`] it owns keeps
/// every allocated identifier unique for that run.
pub struct ModelGenerator<'a> {
    options: &'a GeneratorOptions,
    type_mapper: &'a dyn TypeMappingSource,
    namer: NameRegistry,
}

impl<'a> ModelGenerator<'a> {
    /// Create a generator for the given configuration and type mapper
    pub fn new(options: &'a GeneratorOptions, type_mapper: &'a dyn TypeMappingSource) -> Self {
        Self {
            options,
            type_mapper,
            namer: NameRegistry::new(),
        }
    }

    /// Transform the schema into a populated [`SchemaContext`].
    ///
    /// Fails fast on invalid configuration or a missing database name;
    /// every table-level problem after that is recovered locally so one
    /// malformed table never aborts the run.
    pub fn generate(&mut self, schema: &DatabaseSchema) -> GeneratorResult<SchemaContext> {
        self.options.validate()?;

        if schema.database_name.trim().is_empty() {
            return Err(GeneratorError::MissingInput("database name".to_string()));
        }

        info!(database = %schema.database_name, "building generation model");

        let mut context = SchemaContext::new(naming::legal_name(&schema.database_name));

        for table in &schema.tables {
            if filter::is_table_ignored(table, &self.options.database) {
                debug!(table = %table.qualified_name(), "skipping table");
                continue;
            }

            debug!(table = %table.qualified_name(), "processing table");

            let id = self.get_entity(&mut context, schema, table, true, true);
            self.create_models(&mut context, id);
            self.create_endpoints(&mut context, id);
        }

        Ok(context)
    }

    /// Look up or build the entity for a table.
    ///
    /// Each phase checks its processed flag first, which makes this
    /// safe to call repeatedly and recursively: a cyclic foreign-key
    /// graph short-circuits instead of recursing forever. Relationship
    /// and method processing can be deferred by the caller (the
    /// resolver builds principal entities properties-only).
    fn get_entity(
        &mut self,
        context: &mut SchemaContext,
        schema: &DatabaseSchema,
        table: &TableSchema,
        process_relationships: bool,
        process_methods: bool,
    ) -> EntityId {
        let id = match context.entity_by_table(&table.name, table.schema.as_deref()) {
            Some(id) => id,
            None => self.create_entity(context, table),
        };

        if !context.entity(id).properties_processed {
            self.create_properties(context, id, table);
        }

        if process_relationships && !context.entity(id).relationships_processed {
            self.create_relationships(context, schema, id, table);
        }

        if process_methods && !context.entity(id).methods_processed {
            self.create_methods(context, id, table);
        }

        id
    }

    fn create_entity(&mut self, context: &mut SchemaContext, table: &TableSchema) -> EntityId {
        let entity_options = &self.options.data.entity;

        let class_name = match &entity_options.name {
            Some(name) if !name.trim().is_empty() => name.replace("{entity}", &self.derive_entity_name(&table.name)),
            _ => self.class_name(&table.name, table.schema.as_deref()),
        };
        let entity_name = self.namer.unique_type_name(&class_name);

        let set_base = match entity_options.set_naming {
            SetNaming::Preserve => entity_name.clone(),
            SetNaming::Suffix => format!("{}DataSet", entity_name),
            SetNaming::Plural => naming::pluralize(&entity_name),
        };
        let set_name = self.namer.unique_set_name(&naming::legal_name(&set_base));

        let mut entity = Entity::new(&table.name, table.schema.as_deref());
        entity.is_view = table.is_view;
        entity.entity_name = entity_name;
        entity.namespace = entity_options.namespace.clone();
        entity.base_type = entity_options.base_type.clone();
        entity.set_name = set_name;

        if self.options.data.mapping.temporal {
            if let Some(temporal) = &table.temporal {
                entity.temporal = Some(TemporalEntity {
                    history_table: temporal.history_table.clone(),
                    history_schema: temporal.history_schema.clone(),
                    start_column: temporal.start_column().map(str::to_string),
                    start_property: temporal.period_start_property.clone(),
                    end_column: temporal.end_column().map(str::to_string),
                    end_property: temporal.period_end_property.clone(),
                });
            }
        }

        context.add_entity(entity)
    }

    fn create_properties(&mut self, context: &mut SchemaContext, id: EntityId, table: &TableSchema) {
        let entity_name = context.entity(id).entity_name.clone();

        for column in &table.columns {
            let mapping = match self.type_mapper.find_mapping(&column.store_type) {
                Some(mapping) => mapping,
                None => {
                    warn!(
                        column = %column.name,
                        store_type = %column.store_type,
                        "no mapping for store type; skipping column"
                    );
                    continue;
                }
            };

            let name = naming::member_name(&entity_name, &column.name);
            let mut property_name = name.clone();
            for expression in &self.options.data.entity.renaming.properties {
                if let Ok(rule) = Regex::new(expression) {
                    property_name = rule.replace_all(&property_name, "").into_owned();
                }
            }

            // never let a rename rule strip the name entirely
            if property_name.trim().is_empty() {
                property_name = name;
            }

            let property_name = self.namer.unique_member_name(&entity_name, &property_name);

            let is_primary_key = table
                .primary_key
                .as_ref()
                .map(|pk| pk.columns.contains(&column.name))
                .unwrap_or(false);
            let is_foreign_key = table
                .foreign_keys
                .iter()
                .any(|fk| fk.columns.contains(&column.name));
            let is_unique = table
                .unique_constraints
                .iter()
                .any(|c| c.columns.contains(&column.name))
                || table
                    .indexes
                    .iter()
                    .filter(|i| i.is_unique)
                    .any(|i| i.columns.contains(&column.name));

            let mut value_generated = column.value_generated;
            if value_generated.is_none()
                && column
                    .computed_sql
                    .as_deref()
                    .map(|sql| !sql.trim().is_empty())
                    .unwrap_or(false)
            {
                value_generated = Some(ValueGenerated::OnAddOrUpdate);
            }

            let mut value_type = mapping.value_type;
            if column.is_row_version && value_type == ValueType::Bytes {
                value_type = match self.options.data.mapping.row_version {
                    RowVersionMapping::Bytes => ValueType::Bytes,
                    RowVersionMapping::I64 => ValueType::I64,
                    RowVersionMapping::U64 => ValueType::U64,
                };
            }

            let property = Property {
                column_name: column.name.clone(),
                property_name,
                is_nullable: column.is_nullable,
                is_primary_key,
                is_foreign_key,
                is_unique,
                is_concurrency_token: column.is_concurrency_token,
                is_row_version: column.is_row_version,
                default_value: column.default_value.clone(),
                default_sql: column.default_sql.clone(),
                value_generated,
                store_type: mapping.store_type,
                native_type: mapping.native_type,
                value_type,
                size: mapping.size,
            };

            let entity = context.entity_mut(id);
            match entity
                .properties
                .iter_mut()
                .find(|p| p.column_name == column.name)
            {
                Some(existing) => *existing = property,
                None => entity.properties.push(property),
            }
        }

        context.entity_mut(id).properties_processed = true;

        if self.options.data.mapping.temporal {
            if let Some(temporal) = &table.temporal {
                let period_columns = [temporal.start_column(), temporal.end_column()];
                for column in period_columns.into_iter().flatten() {
                    self.synthesize_period_property(context, id, &entity_name, column);
                }
            }
        }
    }

    /// Add a temporal period boundary as a generated member when the
    /// table does not expose it as an ordinary column
    fn synthesize_period_property(
        &mut self,
        context: &mut SchemaContext,
        id: EntityId,
        entity_name: &str,
        column: &str,
    ) {
        if context.entity(id).property_by_column(column).is_some() {
            return;
        }

        let name = naming::member_name(entity_name, column);
        let property_name = self.namer.unique_member_name(entity_name, &name);

        context.entity_mut(id).properties.push(Property {
            column_name: column.to_string(),
            property_name,
            value_generated: Some(ValueGenerated::OnAddOrUpdate),
            store_type: "datetime2".to_string(),
            native_type: "datetime2".to_string(),
            value_type: ValueType::DateTime,
            ..Default::default()
        });
    }

    fn class_name(&self, table_name: &str, table_schema: Option<&str>) -> String {
        let name = self.derive_entity_name(table_name);

        let qualified = match table_schema {
            Some(schema) if self.options.data.entity.prefix_with_schema_name => {
                format!("{}{}", schema, name)
            }
            _ => name,
        };

        naming::legal_name(&qualified)
    }

    fn derive_entity_name(&self, table_name: &str) -> String {
        let table_naming = self.options.database.table_naming;
        let entity_naming = self.options.data.entity.entity_naming;

        let mut name = table_name.to_string();
        if table_naming != TableNaming::Plural && entity_naming == EntityNaming::Plural {
            name = naming::pluralize(&name);
        } else if table_naming != TableNaming::Singular && entity_naming == EntityNaming::Singular {
            name = naming::singularize(&name);
        }

        let mut renamed = name.clone();
        for expression in &self.options.data.entity.renaming.entities {
            if let Ok(rule) = Regex::new(expression) {
                renamed = rule.replace_all(&renamed, "").into_owned();
            }
        }

        // never let a rename rule strip the name entirely
        if renamed.trim().is_empty() {
            name
        } else {
            renamed
        }
    }
}
