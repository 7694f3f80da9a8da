//! Conversion error handling
//!
//! - Categorized error codes (segmentation, grammar, type lookup)
//! - Syntax errors that quote the offending construct and its position
//! - The pipeline-level [`ConvertError`]
//!
//! Every error is fatal for the run: the input is machine generated, so a
//! mismatch means the grammar needs updating, not that a line can be skipped.

mod codes;
mod error;

pub use codes::{ErrorCategory, ErrorCode};
pub use error::{ConvertError, SyntaxError};
