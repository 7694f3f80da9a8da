//! Foundation types shared by every stage of the converter.
//!
//! - [`TextRange`], [`TextSize`] - byte offsets into the header text
//! - [`LineIndex`], [`Position`] - line/column conversion for diagnostics
//! - [`FxIndexMap`], [`FxIndexSet`] - deterministic ordered collections
//!
//! This module has NO dependencies on other converter modules.

mod position;

pub use position::{LineIndex, Position};

pub use text_size::{TextRange, TextSize};

/// Insertion-ordered map with the fast non-cryptographic hasher
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// Insertion-ordered set with the fast non-cryptographic hasher
pub type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
