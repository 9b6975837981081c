//! Endpoint descriptors layered on top of model projections.

use serde::{Deserialize, Serialize};

/// Operation an endpoint exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointKind {
    Retrieve,
    Create,
    Update,
    Delete,
    Search,
}

/// One generated API endpoint descriptor for an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Operation kind
    pub kind: EndpointKind,
    /// Generated type name, unique within its namespace
    pub name: String,
    /// Namespace of the generated type
    pub namespace: String,
    /// Base type, when configured
    pub base_type: Option<String>,
    /// Request model type name, when the operation takes a body
    pub request_model: Option<String>,
    /// Response model type name, when the operation returns one
    pub response_model: Option<String>,
}
