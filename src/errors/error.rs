//! Conversion error types
//!
//! [`SyntaxError`] carries everything needed to point at the offending
//! construct: code, byte range, the text that failed, and once located a
//! line/column position. [`ConvertError`] is what the pipeline returns.

use std::fmt;

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::{ErrorCategory, ErrorCode};
use crate::base::{LineIndex, Position};

/// Longest snippet quoted in a diagnostic before it is elided
const MAX_SNIPPET_LEN: usize = 80;

/// A segmentation or grammar error with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Byte range of the offending construct
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    /// The offending text, single line, possibly elided
    pub snippet: Option<String>,
    /// Line/column of `range.start()`, filled in by [`SyntaxError::located`]
    pub position: Option<Position>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            hint: None,
            snippet: None,
            position: None,
        }
    }

    /// Create an error with the code's default message
    pub fn from_code(code: ErrorCode, range: TextRange) -> Self {
        Self::new(code.default_message(), range, code)
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Quote the offending text; only its first line is kept
    pub fn with_snippet(mut self, text: &str) -> Self {
        let line = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
        let snippet = if line.chars().count() > MAX_SNIPPET_LEN {
            let cut: String = line.chars().take(MAX_SNIPPET_LEN).collect();
            format!("{cut}...")
        } else {
            line.to_string()
        };
        self.snippet = Some(snippet);
        self
    }

    /// Move the range by `offset`, turning a line-relative error into a
    /// document-relative one
    pub fn shifted(mut self, offset: TextSize) -> Self {
        self.range = self.range + offset;
        self
    }

    /// Resolve the line/column position against the whole document
    pub fn located(mut self, index: &LineIndex) -> Self {
        self.position = Some(index.position(self.range.start()));
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(position) = self.position {
            write!(f, " at {position}")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(snippet) = &self.snippet {
            write!(f, ": `{snippet}`")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "\n  hint: {hint}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// Any failure of a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The header does not match the accepted grammar
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The rewrite pass met a type the catalog never registered
    #[error("{}: no rewrite entry for type `{ty}` referenced by {site}", ErrorCode::E0301)]
    TypeLookup { ty: String, site: String },
}

impl ConvertError {
    /// Create a type lookup error
    pub fn type_lookup(ty: impl Into<String>, site: impl Into<String>) -> Self {
        Self::TypeLookup {
            ty: ty.into(),
            site: site.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax(err) => err.code,
            Self::TypeLookup { .. } => ErrorCode::E0301,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}
