//! Database-level options: table naming convention and table filters.

use serde::{Deserialize, Serialize};

use super::MatchPattern;

/// Naming convention the source tables follow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableNaming {
    /// Table names are already singular
    #[default]
    Singular,
    /// Table names are plural
    Plural,
    /// Mixed or unknown convention
    Mixed,
}

/// Options for the source database as a whole
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseOptions {
    /// Naming convention of the source tables
    pub table_naming: TableNaming,
    /// Tables matching any of these patterns are always processed
    pub include: Vec<MatchPattern>,
    /// Tables matching any of these patterns are skipped, unless included
    pub exclude: Vec<MatchPattern>,
}
