//! Identifier derivation and run-scoped unique name allocation.
//!
//! The [`NameRegistry`] is the naming authority for one generation run.
//! It is an explicit service object owned by the generator, never a
//! process-wide singleton, so parallel runs cannot interfere. Names are
//! allocated monotonically: once taken, a name is never released, which
//! keeps allocation deterministic for a given input sequence.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static ILLEGAL_LEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^a-zA-Z_]+").expect("valid pattern"));

/// Run-scoped allocator of collision-free identifiers.
///
/// Each naming category has its own scope: type names, relationship
/// names, and set names are global to the run; member names are scoped
/// per owning type; model, descriptor, and endpoint names are scoped
/// per namespace. Collisions append the smallest unused positive
/// integer. Comparison is case-insensitive throughout.
#[derive(Debug, Default)]
pub struct NameRegistry {
    type_names: HashSet<String>,
    member_names: HashMap<String, HashSet<String>>,
    relationship_names: HashSet<String>,
    set_names: HashSet<String>,
    scoped_names: HashMap<String, HashSet<String>>,
}

impl NameRegistry {
    /// Create an empty registry for a new run
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique generated type name
    pub fn unique_type_name(&mut self, name: &str) -> String {
        make_unique(&mut self.type_names, name)
    }

    /// Allocate a member name unique within the owning type
    pub fn unique_member_name(&mut self, owner: &str, name: &str) -> String {
        let taken = self.member_names.entry(owner.to_lowercase()).or_default();
        make_unique(taken, name)
    }

    /// Allocate a unique relationship name
    pub fn unique_relationship_name(&mut self, name: &str) -> String {
        make_unique(&mut self.relationship_names, name)
    }

    /// Allocate a unique entity set (collection accessor) name
    pub fn unique_set_name(&mut self, name: &str) -> String {
        make_unique(&mut self.set_names, name)
    }

    /// Allocate a name unique within the given namespace
    pub fn unique_scoped_name(&mut self, namespace: &str, name: &str) -> String {
        let taken = self.scoped_names.entry(namespace.to_lowercase()).or_default();
        make_unique(taken, name)
    }
}

fn make_unique(taken: &mut HashSet<String>, name: &str) -> String {
    if taken.insert(name.to_lowercase()) {
        return name.to_string();
    }

    let mut suffix = 1u32;
    loop {
        let candidate = format!("{}{}", name, suffix);
        if taken.insert(candidate.to_lowercase()) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Convert a raw schema name into a legal identifier.
///
/// Strips illegal leading characters, falls back to a `Number` prefix
/// when stripping removes everything, and converts to PascalCase.
pub fn legal_name(name: &str) -> String {
    if name.trim().is_empty() {
        return String::new();
    }

    let stripped = ILLEGAL_LEADING.replace(name, "");
    let legal = if stripped.trim().is_empty() {
        format!("Number{}", name)
    } else {
        stripped.into_owned()
    };

    pascal_case(&legal)
}

/// Derive a member name, avoiding a clash with the owning type name
pub fn member_name(owner: &str, name: &str) -> String {
    let mut member = legal_name(name);
    if member.eq_ignore_ascii_case(owner) {
        member.push_str("Member");
    }

    member
}

/// Convert a name to PascalCase, splitting on common separators
pub fn pascal_case(name: &str) -> String {
    name.split(['_', '-', ' ', '.'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Simple English pluralization
pub fn pluralize(name: &str) -> String {
    let lower = name.to_lowercase();
    if lower.ends_with('y')
        && !lower.ends_with("ay")
        && !lower.ends_with("ey")
        && !lower.ends_with("iy")
        && !lower.ends_with("oy")
        && !lower.ends_with("uy")
    {
        format!("{}ies", &name[..name.len() - 1])
    } else if lower.ends_with('s')
        || lower.ends_with("sh")
        || lower.ends_with("ch")
        || lower.ends_with('x')
        || lower.ends_with('z')
    {
        format!("{}es", name)
    } else {
        format!("{}s", name)
    }
}

/// Simple English singularization
pub fn singularize(name: &str) -> String {
    let lower = name.to_lowercase();
    if lower.ends_with("ies") {
        format!("{}y", &name[..name.len() - 3])
    } else if lower.ends_with("sses")
        || lower.ends_with("shes")
        || lower.ends_with("ches")
        || lower.ends_with("xes")
        || lower.ends_with("zes")
    {
        name[..name.len() - 2].to_string()
    } else if lower.ends_with('s') && name.len() > 1 {
        name[..name.len() - 1].to_string()
    } else {
        name.to_string()
    }
}
