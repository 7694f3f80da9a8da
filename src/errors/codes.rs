//! Error code definitions for conversion diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Segmentation errors (enum / interface block outlines)
//! - E02xx: Entity grammar errors (members, method and property lines)
//! - E03xx: Type lookup errors (rewrite table consistency)

use std::fmt;

/// Broad family an [`ErrorCode`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A block does not match the enum or interface outline
    Segmentation,
    /// A line inside a block matches none of its grammars
    Grammar,
    /// The rewrite pass met a type the catalog never registered
    TypeLookup,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Segmentation => "segmentation error",
            Self::Grammar => "grammar error",
            Self::TypeLookup => "type lookup error",
        }
    }
}

/// Error codes for conversion diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Segmentation errors
    // =========================================================================
    /// `enum NAME {` without a closing `};`
    E0101,
    /// `@interface`/`@protocol` without a closing `@end`
    E0102,
    /// Enum name is not a single identifier
    E0103,
    /// Interface name is missing or not a single identifier
    E0104,

    // =========================================================================
    // E02xx: Entity grammar errors
    // =========================================================================
    /// Enum member is not `IDENT = VALUE`
    E0201,
    /// Method line matches neither selector form
    E0202,
    /// Property line does not end in `<Type><name>;`
    E0203,
    /// Property attribute list is not closed
    E0204,

    // =========================================================================
    // E03xx: Type lookup errors
    // =========================================================================
    /// Type missing from the rewrite table
    E0301,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0301 => "E0301",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 => ErrorCategory::Segmentation,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => ErrorCategory::Grammar,
            Self::E0301 => ErrorCategory::TypeLookup,
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unterminated enum block",
            Self::E0102 => "unterminated interface block",
            Self::E0103 => "malformed enum header",
            Self::E0104 => "malformed interface header",
            Self::E0201 => "malformed enum member",
            Self::E0202 => "malformed method declaration",
            Self::E0203 => "malformed property declaration",
            Self::E0204 => "unclosed property attribute list",
            Self::E0301 => "type missing from rewrite table",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
