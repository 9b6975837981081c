//! Model projection options.
//!
//! Each projection kind (read, create, update, search) is its own
//! options struct; the [`ProjectionOptions`] trait is the shared
//! capability surface the projector consumes. New projection kinds are
//! added as new variants implementing the trait, not by subclassing.

use serde::{Deserialize, Serialize};

use super::MatchPattern;

/// Include/exclude pattern sets for entities and properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    /// Patterns matched against generated entity type names
    pub entities: Vec<MatchPattern>,
    /// Patterns matched against `EntityName.PropertyName`
    pub properties: Vec<MatchPattern>,
}

/// Options shared by every model projection of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedModelOptions {
    /// Fallback namespace for projections without their own
    pub namespace: String,
    /// Shared include patterns, unioned with each projection's
    pub include: SelectionOptions,
    /// Shared exclude patterns, unioned with each projection's
    pub exclude: SelectionOptions,
}

impl Default for SharedModelOptions {
    fn default() -> Self {
        Self {
            namespace: "Domain.Models".to_string(),
            include: SelectionOptions::default(),
            exclude: SelectionOptions::default(),
        }
    }
}

/// Capability surface of one model projection kind
pub trait ProjectionOptions {
    /// Whether this projection is generated at all
    fn generate(&self) -> bool;
    /// Type name template; `{entity}` expands to the entity type name
    fn name_template(&self) -> &str;
    /// Namespace override, falling back to the shared namespace
    fn namespace(&self) -> Option<&str>;
    /// Base type of the generated model
    fn base_type(&self) -> Option<&str>;
    /// Attributes attached to the generated model
    fn attributes(&self) -> &[String];
    /// Projection-specific include patterns
    fn include(&self) -> &SelectionOptions;
    /// Projection-specific exclude patterns
    fn exclude(&self) -> &SelectionOptions;

    /// Resolve the concrete model type name for an entity
    fn model_name(&self, entity_name: &str) -> String {
        self.name_template().replace("{entity}", entity_name)
    }
}

macro_rules! projection_options {
    ($(#[$doc:meta])* $name:ident, $template:literal, $generate:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            /// Whether this projection is generated
            pub generate: bool,
            /// Type name template; `{entity}` expands to the entity name
            pub name_template: String,
            /// Namespace override
            pub namespace: Option<String>,
            /// Base type of the generated model
            pub base_type: Option<String>,
            /// Attributes attached to the generated model
            pub attributes: Vec<String>,
            /// Include patterns for this projection
            pub include: SelectionOptions,
            /// Exclude patterns for this projection
            pub exclude: SelectionOptions,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    generate: $generate,
                    name_template: $template.to_string(),
                    namespace: None,
                    base_type: None,
                    attributes: Vec::new(),
                    include: SelectionOptions::default(),
                    exclude: SelectionOptions::default(),
                }
            }
        }

        impl ProjectionOptions for $name {
            fn generate(&self) -> bool {
                self.generate
            }

            fn name_template(&self) -> &str {
                &self.name_template
            }

            fn namespace(&self) -> Option<&str> {
                self.namespace.as_deref()
            }

            fn base_type(&self) -> Option<&str> {
                self.base_type.as_deref()
            }

            fn attributes(&self) -> &[String] {
                &self.attributes
            }

            fn include(&self) -> &SelectionOptions {
                &self.include
            }

            fn exclude(&self) -> &SelectionOptions {
                &self.exclude
            }
        }
    };
}

projection_options!(
    /// Options for the read projection
    ReadModelOptions,
    "{entity}ReadModel",
    true
);

projection_options!(
    /// Options for the create projection
    CreateModelOptions,
    "{entity}CreateModel",
    true
);

projection_options!(
    /// Options for the update projection
    UpdateModelOptions,
    "{entity}UpdateModel",
    true
);

projection_options!(
    /// Options for the search projection
    SearchModelOptions,
    "{entity}SearchModel",
    true
);

/// Options for a companion descriptor (mapper or validator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorOptions {
    /// Type name template; `{entity}` expands to the entity type name
    pub name_template: String,
    /// Namespace for the descriptor
    pub namespace: String,
    /// Base type of the descriptor
    pub base_type: Option<String>,
}

impl DescriptorOptions {
    fn new(template: &str, namespace: &str) -> Self {
        Self {
            name_template: template.to_string(),
            namespace: namespace.to_string(),
            base_type: None,
        }
    }

    /// Resolve the concrete descriptor name for an entity
    pub fn resolve_name(&self, entity_name: &str) -> String {
        self.name_template.replace("{entity}", entity_name)
    }
}

impl Default for DescriptorOptions {
    fn default() -> Self {
        Self::new("{entity}Mapper", "Domain.Mapping")
    }
}

/// Options group for all model projections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions {
    /// Options shared across projections
    pub shared: SharedModelOptions,
    /// Read projection options
    pub read: ReadModelOptions,
    /// Create projection options
    pub create: CreateModelOptions,
    /// Update projection options
    pub update: UpdateModelOptions,
    /// Search projection options
    pub search: SearchModelOptions,
    /// Companion mapper descriptor options
    pub mapper: DescriptorOptions,
    /// Companion validator descriptor options
    pub validator: DescriptorOptions,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            shared: SharedModelOptions::default(),
            read: ReadModelOptions::default(),
            create: CreateModelOptions::default(),
            update: UpdateModelOptions::default(),
            search: SearchModelOptions::default(),
            mapper: DescriptorOptions::new("{entity}Mapper", "Domain.Mapping"),
            validator: DescriptorOptions::new("{entity}Validator", "Domain.Validation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_from_template() {
        let options = ReadModelOptions::default();
        assert_eq!(options.model_name("User"), "UserReadModel");

        let custom = ReadModelOptions {
            name_template: "{entity}Dto".to_string(),
            ..Default::default()
        };
        assert_eq!(custom.model_name("User"), "UserDto");
    }

    #[test]
    fn test_descriptor_defaults() {
        let options = ModelOptions::default();
        assert_eq!(options.mapper.resolve_name("User"), "UserMapper");
        assert_eq!(options.validator.resolve_name("User"), "UserValidator");
        assert_eq!(options.validator.namespace, "Domain.Validation");
    }
}
