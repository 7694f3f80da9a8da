//! # sdef2swift
//!
//! Converts the Objective-C scripting header that `sdef | sdp` generates for a
//! scriptable application into Swift `@objc` protocols usable through
//! ScriptingBridge.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! cli       → Command-line surface, file I/O
//!   ↓
//! convert   → Pipeline entry points, ConvertOptions
//!   ↓
//! emit      → Swift text, EmitOptions
//!   ↓
//! semantic  → Type catalog, rewrite table, inheritance heuristics
//!   ↓
//! parser    → Segmentation, Logos lexer, recursive-descent line grammars
//!   ↓
//! syntax    → Declaration types (enums, interfaces, properties, methods)
//!   ↓
//! errors    → ErrorCode, SyntaxError, ConvertError
//!   ↓
//! base      → Primitives (LineIndex, Position, TextRange, ordered maps)
//! ```
//!
//! ## Example
//!
//! ```
//! let swift = sdef2swift::convert("@protocol P\n- (BOOL) exists;\n@end\n").unwrap();
//! assert!(swift.contains("@objc optional func exists() -> Bool;"));
//! ```

// ============================================================================
// MODULES (dependency order: base → errors → syntax → parser → semantic → emit)
// ============================================================================

/// Foundation types: LineIndex, Position, TextRange, ordered maps
pub mod base;

/// Error codes and error types
pub mod errors;

/// Declaration types produced by the parser
pub mod syntax;

/// Segmentation, lexer and line grammars
pub mod parser;

/// Type catalog, rewrite table and inheritance normalization
pub mod semantic;

/// Swift emission
pub mod emit;

/// Pipeline entry points
pub mod convert;

/// Command-line interface
pub mod cli;

// Re-export the pipeline
pub use convert::{Conversion, ConvertOptions, convert, convert_with, parse_header};

// Re-export foundation types
pub use base::{LineIndex, Position, TextRange, TextSize};
pub use errors::{ConvertError, ErrorCategory, ErrorCode, SyntaxError};
pub use syntax::Header;
