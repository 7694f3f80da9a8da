//! Type catalog and rewrite table
//!
//! ```text
//! collect  every type text used by a property, return value or parameter
//!    ↓
//! build    structural inference, then primitive aliases on top
//!    ↓
//! apply    rewrite every TypeRef through the table
//! ```
//!
//! Collection finishes before any rewrite happens, so the table always sees
//! the header's own spelling of a type.

use tracing::{debug, trace};

use super::heuristics::Heuristics;
use crate::base::{FxIndexMap, FxIndexSet};
use crate::errors::ConvertError;
use crate::syntax::{InterfaceDeclaration, TypeRef};

/// Distinct type keys in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    types: FxIndexSet<String>,
}

impl TypeCatalog {
    /// Gather every type referenced by `interfaces`: per interface, property
    /// types first, then each method's return type and parameter types
    pub fn collect(interfaces: &[InterfaceDeclaration]) -> Self {
        let mut catalog = Self::default();
        for interface in interfaces {
            for property in &interface.properties {
                catalog.add(&property.ty);
            }
            for function in &interface.functions {
                catalog.add(&function.return_type);
                for param in function.arguments.iter().filter_map(|a| a.param.as_ref()) {
                    catalog.add(&param.ty);
                }
            }
        }
        debug!(types = catalog.len(), "collected types");
        catalog
    }

    pub fn add(&mut self, ty: &TypeRef) -> bool {
        if self.types.contains(ty.key()) {
            return false;
        }
        self.types.insert(ty.key().to_string())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.types.contains(key)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Infer a rewrite for every collected type, then apply the aliases,
    /// which replace any inferred entry for the same key
    pub fn build(&self, heuristics: &Heuristics) -> TypeRewriteTable {
        let mut table = TypeRewriteTable::default();
        for key in self.iter() {
            let target = TypeRewriteTable::infer(key);
            trace!(key, target = %target, "inferred type");
            table.insert(key, target);
        }
        for (key, target) in &heuristics.primitive_aliases {
            match table.insert(key.as_str(), target.as_str()) {
                Some(previous) => trace!(key = %key, %previous, target = %target, "overrode type"),
                None => trace!(key = %key, target = %target, "aliased type"),
            }
        }
        debug!(entries = table.len(), "built rewrite table");
        table
    }
}

/// Type key (trimmed header text) to Swift type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRewriteTable {
    entries: FxIndexMap<String, String>,
}

impl TypeRewriteTable {
    /// Structural rewrite of one type text
    ///
    /// `Container<Element> *` becomes `[Element]`; anything else loses its
    /// pointer markers.
    pub fn infer(raw: &str) -> String {
        let ty = raw.trim();
        match collection_element(ty) {
            Some(element) => format!("[{}]", strip_pointers(element)),
            None => strip_pointers(ty),
        }
    }

    /// Set the rewrite for `key`, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, target: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), target.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rewrite every type field of `interfaces`
    ///
    /// Stops at the first type with no entry; interfaces before it are
    /// already rewritten.
    pub fn apply(&self, interfaces: &mut [InterfaceDeclaration]) -> Result<(), ConvertError> {
        let mut rewritten = 0usize;
        for interface in interfaces.iter_mut() {
            let owner = interface.name.clone();

            for property in &mut interface.properties {
                let target = self.target_for(&property.ty, || {
                    format!("property `{}` of `{owner}`", property.name)
                })?;
                property.ty.set_target(target);
                rewritten += 1;
            }

            for function in &mut interface.functions {
                let selector = function.selector().to_string();
                let target = self.target_for(&function.return_type, || {
                    format!("return type of `{selector}` in `{owner}`")
                })?;
                function.return_type.set_target(target);
                rewritten += 1;

                for param in function.arguments.iter_mut().filter_map(|a| a.param.as_mut()) {
                    let target = self.target_for(&param.ty, || {
                        format!("parameter `{}` of `{selector}` in `{owner}`", param.name)
                    })?;
                    param.ty.set_target(target);
                    rewritten += 1;
                }
            }
        }
        debug!(rewritten, "applied rewrite table");
        Ok(())
    }

    fn target_for(
        &self,
        ty: &TypeRef,
        site: impl FnOnce() -> String,
    ) -> Result<String, ConvertError> {
        self.get(ty.key())
            .map(str::to_string)
            .ok_or_else(|| ConvertError::type_lookup(ty.key(), site()))
    }
}

/// Element of a `Container<Element> *` type: first `<`, last `>`, then `*`
fn collection_element(ty: &str) -> Option<&str> {
    let open = ty.find('<')?;
    let close = ty.rfind('>')?;
    if close <= open + 1 || ty[..open].trim().is_empty() {
        return None;
    }
    if !ty[close + 1..].trim_start().starts_with('*') {
        return None;
    }
    Some(&ty[open + 1..close])
}

fn strip_pointers(ty: &str) -> String {
    ty.replace('*', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_element() {
        assert_eq!(collection_element("NSArray<MusicTrack *> *"), Some("MusicTrack *"));
        assert_eq!(collection_element("NSArray<MusicTrack *>"), None);
        assert_eq!(collection_element("<MusicTrack *> *"), None);
        assert_eq!(collection_element("NSArray<> *"), None);
        assert_eq!(collection_element("NSString *"), None);
    }

    #[test]
    fn test_nested_collection_uses_outer_brackets() {
        assert_eq!(
            TypeRewriteTable::infer("NSDictionary<NSString *, NSArray<NSURL *> *> *"),
            "[NSString , NSArray<NSURL >]"
        );
    }

    #[test]
    fn test_strip_pointers() {
        assert_eq!(strip_pointers(" SBObject * "), "SBObject");
        assert_eq!(strip_pointers("char **"), "char");
    }
}
