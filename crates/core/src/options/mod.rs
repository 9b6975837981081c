//! Typed configuration for a generation run.
//!
//! All options are plain serde-deserializable structs with defaults.
//! Name templates use a single `{entity}` placeholder resolved into a
//! concrete string per entity before any naming decision is made.

mod database;
mod endpoint;
mod entity;
mod mapping;
mod model;
mod pattern;

pub use database::{DatabaseOptions, TableNaming};
pub use endpoint::{ApiOptions, EndpointOptions};
pub use entity::{
    EntityNaming, EntityOptions, RelationshipNaming, RenamingOptions, SetNaming,
};
pub use mapping::{MappingOptions, RowVersionMapping};
pub use model::{
    CreateModelOptions, DescriptorOptions, ModelOptions, ProjectionOptions, ReadModelOptions,
    SearchModelOptions, SelectionOptions, SharedModelOptions, UpdateModelOptions,
};
pub use pattern::MatchPattern;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, GeneratorResult};

/// Project-level options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
    /// Root namespace of the generated project
    pub namespace: String,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            namespace: "Project".to_string(),
        }
    }
}

/// Data-layer options group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataOptions {
    /// Entity generation options
    pub entity: EntityOptions,
    /// Store mapping options
    pub mapping: MappingOptions,
}

/// Full configuration for one generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Project-level options
    pub project: ProjectOptions,
    /// Source database options
    pub database: DatabaseOptions,
    /// Data-layer options
    pub data: DataOptions,
    /// Model projection options
    pub model: ModelOptions,
    /// Endpoint descriptor options
    pub endpoint: EndpointOptions,
}

impl GeneratorOptions {
    /// Validate the configuration, compiling every configured pattern.
    ///
    /// Invalid patterns are fatal; a run never starts with a filter or
    /// rename rule that cannot take effect.
    pub fn validate(&self) -> GeneratorResult<()> {
        for pattern in self.database.include.iter().chain(&self.database.exclude) {
            pattern.compile()?;
        }

        for selection in [
            &self.model.shared.include,
            &self.model.shared.exclude,
            self.model.read.include(),
            self.model.read.exclude(),
            self.model.create.include(),
            self.model.create.exclude(),
            self.model.update.include(),
            self.model.update.exclude(),
            self.model.search.include(),
            self.model.search.exclude(),
        ] {
            for pattern in selection.entities.iter().chain(&selection.properties) {
                pattern.compile()?;
            }
        }

        let renaming = &self.data.entity.renaming;
        for expression in renaming.entities.iter().chain(&renaming.properties) {
            Regex::new(expression).map_err(|source| GeneratorError::InvalidPattern {
                pattern: expression.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_validate() {
        assert!(GeneratorOptions::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_exclude_pattern_is_fatal() {
        let mut options = GeneratorOptions::default();
        options.database.exclude.push(MatchPattern::new("(["));

        let err = options.validate().unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidPattern { .. }));
    }

    #[test]
    fn test_invalid_rename_rule_is_fatal() {
        let mut options = GeneratorOptions::default();
        options
            .data
            .entity
            .renaming
            .properties
            .push("([".to_string());

        assert!(options.validate().is_err());
    }
}
