//! Fixed corrections applied on top of structural inference
//!
//! The tables describe the Music.app scripting header this tool was written
//! for. Callers converting other headers can supply their own [`Heuristics`].

use crate::base::{FxIndexMap, FxIndexSet};

/// Scalar C types whose Swift spelling cannot be derived from the text
pub const PRIMITIVE_ALIASES: &[(&str, &str)] = &[
    ("long long", "Int64"),
    ("long", "Int"),
    ("id", "Any"),
    ("BOOL", "Bool"),
    ("double", "Double"),
];

/// Inheritance expressions (`Base <P1, P2>`) replaced by a single parent
pub const INHERITANCE_COLLAPSE: &[(&str, &str)] =
    &[("SBObject <MusicGenericMethods>", "MusicGenericMethods")];

/// Bases that map to no inheritance at all
pub const ROOT_BASES: &[&str] = &["SBApplication"];

/// Static rewrite rules, keyed by trimmed source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heuristics {
    /// Type key -> Swift type; always wins over the inferred entry
    pub primitive_aliases: FxIndexMap<String, String>,
    /// Inheritance expression -> replacement parent
    pub inheritance_collapse: FxIndexMap<String, String>,
    /// Inherited types cleared to "no inheritance"
    pub root_bases: FxIndexSet<String>,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            primitive_aliases: pairs(PRIMITIVE_ALIASES),
            inheritance_collapse: pairs(INHERITANCE_COLLAPSE),
            root_bases: ROOT_BASES.iter().map(|base| base.to_string()).collect(),
        }
    }
}

impl Heuristics {
    /// No corrections: inference output is used as-is and inheritance is untouched
    pub fn none() -> Self {
        Self {
            primitive_aliases: FxIndexMap::default(),
            inheritance_collapse: FxIndexMap::default(),
            root_bases: FxIndexSet::default(),
        }
    }

    pub fn alias(&self, key: &str) -> Option<&str> {
        self.primitive_aliases.get(key).map(String::as_str)
    }

    pub fn collapse(&self, expression: &str) -> Option<&str> {
        self.inheritance_collapse.get(expression).map(String::as_str)
    }

    pub fn is_root_base(&self, base: &str) -> bool {
        self.root_bases.contains(base)
    }
}

fn pairs(table: &[(&str, &str)]) -> FxIndexMap<String, String> {
    table
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}
