//! Store mapping options: temporal tables and row-version representation.

use serde::{Deserialize, Serialize};

/// Value type generated for row-version columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowVersionMapping {
    /// Keep the raw byte array
    #[default]
    Bytes,
    /// Map to a signed 64-bit integer
    I64,
    /// Map to an unsigned 64-bit integer
    U64,
}

/// Options controlling how schema features map onto generated members
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    /// Capture temporal-table metadata and synthesize period properties
    pub temporal: bool,
    /// Representation of row-version columns
    pub row_version: RowVersionMapping,
}
