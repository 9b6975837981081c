//! Regex match patterns used by the include/exclude filter sets.

use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, GeneratorResult};

/// A configured regex pattern matched against fully qualified element
/// names (`schema.table` or `EntityName.PropertyName`).
///
/// The compiled regex is cached on first use. Patterns are validated up
/// front by [`GeneratorOptions::validate`](crate::GeneratorOptions::validate);
/// a pattern that somehow escapes validation and fails to compile never
/// matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchPattern {
    expression: String,

    #[serde(skip)]
    compiled: OnceCell<Option<Regex>>,
}

impl MatchPattern {
    /// Create a pattern from a regex expression
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            compiled: OnceCell::new(),
        }
    }

    /// The raw expression
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Compile the expression, surfacing invalid patterns as fatal
    pub fn compile(&self) -> GeneratorResult<()> {
        match Regex::new(&self.expression) {
            Ok(_) => Ok(()),
            Err(source) => Err(GeneratorError::InvalidPattern {
                pattern: self.expression.clone(),
                source,
            }),
        }
    }

    /// Whether the pattern matches the given qualified name
    pub fn is_match(&self, name: &str) -> bool {
        self.regex().map(|r| r.is_match(name)).unwrap_or(false)
    }

    fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(&self.expression).ok())
            .as_ref()
    }
}

impl From<&str> for MatchPattern {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}
