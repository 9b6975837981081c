//! Relationship resolution.
//!
//! Every foreign key yields a cross-linked pair of relationship
//! records: one on the foreign-key side, one on the principal side.
//! The principal entity is built on demand (properties only) so the
//! table graph is walked as entities are discovered.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use modelgen_core::options::RelationshipNaming;
use modelgen_core::schema::{DatabaseSchema, ForeignKeySchema, TableSchema};

use crate::filter;
use crate::metadata::{Cardinality, Entity, EntityId, Property, Relationship, SchemaContext};
use crate::naming;

use super::ModelGenerator;

static ID_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(_ID|_id|_Id|\.ID|\.id|\.Id|ID|Id)$").expect("valid pattern"));
static LEADING_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d").expect("valid pattern"));

impl ModelGenerator<'_> {
    pub(super) fn create_relationships(
        &mut self,
        context: &mut SchemaContext,
        schema: &DatabaseSchema,
        id: EntityId,
        table: &TableSchema,
    ) {
        for foreign_key in &table.foreign_keys {
            let constraint = foreign_key.name.as_deref().unwrap_or("<unnamed>");

            let principal_table = match schema.table(
                &foreign_key.principal_table,
                foreign_key.principal_schema.as_deref(),
            ) {
                Some(principal) => principal,
                None => {
                    warn!(
                        constraint = %constraint,
                        principal = %foreign_key.principal_table,
                        "principal table not found; skipping foreign key"
                    );
                    continue;
                }
            };

            if filter::is_table_ignored(principal_table, &self.options.database) {
                debug!(constraint = %constraint, "skipping relationship; principal table excluded");
                continue;
            }

            self.create_relationship(context, schema, id, table, foreign_key, principal_table);
        }

        context.entity_mut(id).relationships_processed = true;
    }

    fn create_relationship(
        &mut self,
        context: &mut SchemaContext,
        schema: &DatabaseSchema,
        foreign_id: EntityId,
        foreign_table: &TableSchema,
        foreign_key: &ForeignKeySchema,
        principal_table: &TableSchema,
    ) {
        // properties only; deeper phases run when the principal's own
        // table comes up in the walk
        let principal_id = self.get_entity(context, schema, principal_table, false, false);

        let foreign_name = context.entity(foreign_id).entity_name.clone();
        let principal_name = context.entity(principal_id).entity_name.clone();

        let constraint = foreign_key.name.as_deref().unwrap_or("<unnamed>");
        let foreign_members =
            key_members(context.entity(foreign_id), &foreign_key.columns, constraint);
        let principal_members = key_members(
            context.entity(principal_id),
            &foreign_key.principal_columns,
            constraint,
        );

        // a key with no usable properties on either side cannot be represented
        if foreign_members.is_empty() || principal_members.is_empty() {
            warn!(constraint = %constraint, "foreign key resolves to no usable properties; skipping");
            return;
        }

        let foreign_property_names: Vec<String> = foreign_members
            .iter()
            .map(|p| p.property_name.clone())
            .collect();
        let principal_property_names: Vec<String> = principal_members
            .iter()
            .map(|p| p.property_name.clone())
            .collect();

        let relationship_name = match &foreign_key.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!(
                "FK_{}_{}_{}",
                foreign_name,
                principal_name,
                principal_property_names.join("_")
            ),
        };
        let relationship_name = self.namer.unique_relationship_name(&relationship_name);

        let foreign_required = foreign_members.iter().all(Property::is_required);
        let principal_required = principal_members.iter().all(Property::is_required);

        let foreign_cardinality = if foreign_required {
            Cardinality::One
        } else {
            Cardinality::ZeroOrOne
        };

        let prefix = member_prefix(
            &foreign_property_names,
            &principal_property_names,
            &principal_name,
            &foreign_name,
        );

        let foreign_nav = naming::member_name(&foreign_name, &format!("{}{}", prefix, principal_name));
        let foreign_nav = self.namer.unique_member_name(&foreign_name, &foreign_nav);

        {
            let record = relationship_record(
                context.entity_mut(foreign_id),
                &relationship_name,
                true,
                principal_id,
            );
            record.cardinality = foreign_cardinality;
            record.principal_entity = principal_id;
            record.properties = foreign_property_names.clone();
            record.principal_properties = principal_property_names.clone();
            record.property_name = foreign_nav.clone();
        }

        let one_to_one = is_one_to_one(foreign_table, principal_table, &foreign_members);
        let principal_cardinality = if one_to_one {
            if principal_required {
                Cardinality::One
            } else {
                Cardinality::ZeroOrOne
            }
        } else {
            Cardinality::Many
        };

        let mut reverse = format!("{}{}", prefix, foreign_name);
        if !one_to_one {
            reverse = self.collection_nav_name(&reverse);
        }
        let principal_nav = naming::member_name(&principal_name, &reverse);
        let principal_nav = self.namer.unique_member_name(&principal_name, &principal_nav);

        {
            let record = relationship_record(
                context.entity_mut(principal_id),
                &relationship_name,
                false,
                foreign_id,
            );
            record.cardinality = principal_cardinality;
            record.principal_entity = foreign_id;
            record.properties = principal_property_names;
            record.principal_properties = foreign_property_names;
            record.property_name = principal_nav.clone();
            record.principal_property_name = foreign_nav.clone();
            record.principal_cardinality = foreign_cardinality;
        }

        // close the pair: both sides reference each other's navigation
        if let Some(record) = context
            .entity_mut(foreign_id)
            .relationships
            .iter_mut()
            .find(|r| r.name == relationship_name && r.is_foreign_key)
        {
            record.principal_property_name = principal_nav;
            record.principal_cardinality = principal_cardinality;
        }
    }

    fn collection_nav_name(&self, name: &str) -> String {
        match self.options.data.entity.relationship_naming {
            RelationshipNaming::Preserve => name.to_string(),
            RelationshipNaming::Suffix => format!("{}List", name),
            RelationshipNaming::Plural => naming::pluralize(name),
        }
    }
}

/// Resolve key columns to their generated properties, warning about and
/// omitting columns the entity does not carry (for example columns that
/// were skipped as unmappable)
fn key_members(entity: &Entity, columns: &[String], constraint: &str) -> Vec<Property> {
    let mut members = Vec::new();

    for column in columns {
        match entity.property_by_column(column) {
            Some(property) => members.push(property.clone()),
            None => warn!(
                column = %column,
                constraint = %constraint,
                "could not find column for relationship"
            ),
        }
    }

    members
}

/// Find or create the relationship record for one side of a foreign key
fn relationship_record<'e>(
    entity: &'e mut Entity,
    name: &str,
    is_foreign_key: bool,
    principal: EntityId,
) -> &'e mut Relationship {
    let position = entity
        .relationships
        .iter()
        .position(|r| r.name == name && r.is_foreign_key == is_foreign_key);

    let index = match position {
        Some(index) => index,
        None => {
            entity
                .relationships
                .push(Relationship::new(name, is_foreign_key, principal));
            entity.relationships.len() - 1
        }
    };

    &mut entity.relationships[index]
}

/// Navigation-name prefix disambiguating multiple foreign keys from one
/// table to the same principal (`CreatedById`/`UpdatedById` referencing
/// `User` become `CreatedBy`/`UpdatedBy` prefixes).
fn member_prefix(
    foreign_keys: &[String],
    principal_keys: &[String],
    principal_class: &str,
    foreign_class: &str,
) -> String {
    let this_key = foreign_keys.first().map(String::as_str).unwrap_or("");
    let other_key = principal_keys.first().map(String::as_str).unwrap_or("");

    let same_name = this_key.eq_ignore_ascii_case(other_key)
        || this_key.eq_ignore_ascii_case(&format!("{}{}", principal_class, other_key));
    if same_name {
        return String::new();
    }

    let mut prefix = this_key.replace(other_key, "");
    prefix = prefix.replace(principal_class, "");
    prefix = prefix.replace(foreign_class, "");
    prefix = ID_SUFFIX.replace(&prefix, "").into_owned();
    prefix = LEADING_DIGIT.replace(&prefix, "").into_owned();

    prefix
}

/// One-to-one holds when the foreign key is the table's entire
/// single-column primary key, or when the foreign column participates
/// in any unique constraint. Multi-column unique constraints count even
/// when the foreign column is only one of several members.
fn is_one_to_one(
    foreign_table: &TableSchema,
    principal_table: &TableSchema,
    foreign_members: &[Property],
) -> bool {
    let foreign_column = match foreign_members.first() {
        Some(property) => property.column_name.as_str(),
        None => return false,
    };

    let key_is_primary = principal_table.primary_key.is_some()
        && foreign_table
            .primary_key
            .as_ref()
            .map(|pk| pk.columns.len() == 1 && pk.columns.iter().any(|c| c == foreign_column))
            .unwrap_or(false);

    if key_is_primary {
        return true;
    }

    foreign_table
        .unique_constraints
        .iter()
        .any(|constraint| constraint.columns.iter().any(|c| c == foreign_column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_prefix_empty_when_names_align() {
        assert_eq!(
            member_prefix(
                &["InstructorId".to_string()],
                &["Id".to_string()],
                "Instructor",
                "Department"
            ),
            ""
        );
        assert_eq!(
            member_prefix(
                &["Id".to_string()],
                &["Id".to_string()],
                "Instructor",
                "Department"
            ),
            ""
        );
    }

    #[test]
    fn test_member_prefix_disambiguates_roles() {
        assert_eq!(
            member_prefix(
                &["PrimaryInstructorId".to_string()],
                &["Id".to_string()],
                "Instructor",
                "OfficeAssignment"
            ),
            "Primary"
        );
        assert_eq!(
            member_prefix(
                &["CreatedByUserId".to_string()],
                &["Id".to_string()],
                "User",
                "Task"
            ),
            "CreatedBy"
        );
    }

    #[test]
    fn test_member_prefix_strips_leading_digit() {
        assert_eq!(
            member_prefix(
                &["2ndOwnerId".to_string()],
                &["Id".to_string()],
                "Owner",
                "Vehicle"
            ),
            "nd"
        );
    }
}
