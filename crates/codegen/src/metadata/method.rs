//! Lookup-method descriptors.

use serde::{Deserialize, Serialize};

/// A lookup accessor keyed by an ordered property set: the primary key,
/// an index, or a single foreign-key column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Ordered concatenation of member names; the dedup key within an
    /// entity and the generated name suffix (`GetBy{suffix}`)
    pub suffix: String,
    /// Source constraint or index name, when one exists
    pub source_name: Option<String>,
    /// Derived from the primary key
    pub is_key: bool,
    /// Derived from an index
    pub is_index: bool,
    /// Backed by a unique index or constraint
    pub is_unique: bool,
    /// Participating member names, in order
    pub properties: Vec<String>,
}
