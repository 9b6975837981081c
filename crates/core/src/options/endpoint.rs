//! API endpoint descriptor options.
//!
//! Endpoints are an optional output layered on top of the model
//! projections; every kind is disabled by default.

use serde::{Deserialize, Serialize};

/// Options for one endpoint kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiOptions {
    /// Whether this endpoint kind is generated
    pub generate: bool,
    /// Type name template; `{entity}` expands to the entity type name
    pub name_template: String,
    /// Namespace override
    pub namespace: Option<String>,
    /// Base type of the generated endpoint
    pub base_type: Option<String>,
}

impl ApiOptions {
    fn new(template: &str) -> Self {
        Self {
            generate: false,
            name_template: template.to_string(),
            namespace: None,
            base_type: None,
        }
    }

    /// Resolve the concrete endpoint type name for an entity
    pub fn resolve_name(&self, entity_name: &str) -> String {
        self.name_template.replace("{entity}", entity_name)
    }
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self::new("{entity}Api")
    }
}

/// Options group for all endpoint kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointOptions {
    /// Fallback namespace for endpoint kinds without their own
    pub namespace: String,
    /// Single-entity retrieval endpoint
    pub retrieve: ApiOptions,
    /// Creation endpoint
    pub create: ApiOptions,
    /// Update endpoint
    pub update: ApiOptions,
    /// Deletion endpoint
    pub delete: ApiOptions,
    /// Search endpoint
    pub search: ApiOptions,
}

impl Default for EndpointOptions {
    fn default() -> Self {
        Self {
            namespace: "Api.Endpoints".to_string(),
            retrieve: ApiOptions::new("{entity}RetrieveApi"),
            create: ApiOptions::new("{entity}CreateApi"),
            update: ApiOptions::new("{entity}UpdateApi"),
            delete: ApiOptions::new("{entity}DeleteApi"),
            search: ApiOptions::new("{entity}SearchApi"),
        }
    }
}

impl EndpointOptions {
    /// Whether any endpoint kind is enabled
    pub fn any_enabled(&self) -> bool {
        self.retrieve.generate
            || self.create.generate
            || self.update.generate
            || self.delete.generate
            || self.search.generate
    }
}
