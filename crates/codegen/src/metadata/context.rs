//! Run-scoped container of generated entities.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Index of an entity within its owning [`SchemaContext`].
///
/// Relationships reference the entity on their other side through this
/// id; the context is the single owner of all entity data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(usize);

/// The populated object graph produced by one generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaContext {
    /// Legalized name of the source database
    pub database_name: String,
    /// Entities in discovery order
    pub entities: Vec<Entity>,
}

impl SchemaContext {
    /// Create an empty context for the given database
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            entities: Vec::new(),
        }
    }

    /// Add an entity, returning its id
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    /// Look up an entity id by source table identity
    pub fn entity_by_table(&self, name: &str, schema: Option<&str>) -> Option<EntityId> {
        self.entities
            .iter()
            .position(|e| e.table_name == name && e.table_schema.as_deref() == schema)
            .map(EntityId)
    }

    /// Borrow an entity by id
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    /// Mutably borrow an entity by id
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.0]
    }

    /// Find an entity by its generated type name
    pub fn entity_by_name(&self, entity_name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.entity_name == entity_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_lookup_by_table_identity() {
        let mut context = SchemaContext::new("Tracker");
        let mut user = Entity::new("User", Some("dbo"));
        user.entity_name = "User".to_string();
        let id = context.add_entity(user);

        assert_eq!(context.entity_by_table("User", Some("dbo")), Some(id));
        assert_eq!(context.entity_by_table("User", None), None);
        assert_eq!(context.entity(id).table_name, "User");
    }
}
