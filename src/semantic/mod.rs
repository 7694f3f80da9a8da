//! # Semantic passes
//!
//! Everything that runs between parsing and emission:
//!
//! - [`TypeCatalog`] gathers the types used across all interfaces and builds
//!   a [`TypeRewriteTable`] mapping them to Swift.
//! - [`normalize_inheritance`] fixes up inherited types that have no direct
//!   Swift counterpart.
//! - [`Heuristics`] holds the fixed tables both passes consult.

mod catalog;
mod heuristics;
mod inheritance;


pub use catalog::{TypeCatalog, TypeRewriteTable};
pub use heuristics::{Heuristics, INHERITANCE_COLLAPSE, PRIMITIVE_ALIASES, ROOT_BASES};
pub use inheritance::{inheritance_expression, normalize_inheritance};
