//! Block segmentation
//!
//! Splits a header into enum blocks and interface/protocol blocks. Both are
//! found by delimiter matching over the raw text:
//!
//! ```text
//! enum <name> {<body>};                      ends at the first "};"
//! @protocol|@interface <header-line>\n ... @end    ends at the first "@end"
//! ```
//!
//! A block starts at the beginning of a line. Blocks never nest: a `};`
//! inside an enum body or an `@end` inside an interface body terminates the
//! block early.

use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::errors::{ErrorCode, SyntaxError};
use crate::syntax::DeclKind;

const ENUM_KEYWORD: &str = "enum ";
const ENUM_OPEN: &str = " {";
const ENUM_CLOSE: &str = "};";
pub(crate) const INTERFACE_END: &str = "@end";

/// A slice of the header holding one declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    /// Byte offset of `text` in the whole header
    pub offset: TextSize,
}

impl Block<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// The header split into its two block families, each in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments<'a> {
    pub enums: Vec<Block<'a>>,
    pub interfaces: Vec<Block<'a>>,
}

/// Split `source` into enum and interface blocks
pub fn segment(source: &str) -> Result<Segments<'_>, SyntaxError> {
    let segments = Segments {
        enums: enum_blocks(source)?,
        interfaces: interface_blocks(source)?,
    };
    debug!(
        enums = segments.enums.len(),
        interfaces = segments.interfaces.len(),
        "segmented header"
    );
    Ok(segments)
}

/// Every `enum NAME { ... };` block starting at a line start
pub fn enum_blocks(source: &str) -> Result<Vec<Block<'_>>, SyntaxError> {
    let mut blocks = Vec::new();
    let mut resume = 0;

    for start in line_starts(source) {
        if start < resume || !source[start..].starts_with(ENUM_KEYWORD) {
            continue;
        }
        // The name is at least one character long
        let name_start = start + ENUM_KEYWORD.len();
        let end = find_from(source, name_start + 1, ENUM_OPEN)
            .and_then(|open| find_from(source, open + ENUM_OPEN.len() + 1, ENUM_CLOSE))
            .map(|close| close + ENUM_CLOSE.len())
            .ok_or_else(|| unterminated(source, start, ErrorCode::E0101, ENUM_CLOSE))?;

        blocks.push(block(source, start, end));
        resume = end;
    }

    Ok(blocks)
}

/// Every `@protocol`/`@interface` ... `@end` block starting at a line start
pub fn interface_blocks(source: &str) -> Result<Vec<Block<'_>>, SyntaxError> {
    let mut blocks = Vec::new();
    let mut resume = 0;

    for start in line_starts(source) {
        if start < resume {
            continue;
        }
        let Some(kind) = DeclKind::from_prefix(&source[start..]) else {
            continue;
        };
        // The header line holds at least one character after the keyword
        let header_start = start + kind.keyword().len();
        let end = find_from(source, header_start + 1, "\n")
            .and_then(|header_end| find_from(source, header_end + 1, INTERFACE_END))
            .map(|at| at + INTERFACE_END.len())
            .ok_or_else(|| unterminated(source, start, ErrorCode::E0102, INTERFACE_END))?;

        blocks.push(block(source, start, end));
        resume = end;
    }

    Ok(blocks)
}

fn block(source: &str, start: usize, end: usize) -> Block<'_> {
    Block {
        text: &source[start..end],
        offset: TextSize::new(start as u32),
    }
}

fn unterminated(source: &str, start: usize, code: ErrorCode, terminator: &str) -> SyntaxError {
    let offset = TextSize::new(start as u32);
    let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
    SyntaxError::from_code(code, TextRange::new(offset, TextSize::new(line_end as u32)))
        .with_snippet(&source[start..line_end])
        .with_hint(format!("no `{terminator}` closes this block"))
}

/// Byte offsets at which a line begins
fn line_starts(source: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
}

/// Find `pattern` at or after byte `from`, rounding `from` up to a char boundary
fn find_from(source: &str, from: usize, pattern: &str) -> Option<usize> {
    let from = (from..=source.len()).find(|&i| source.is_char_boundary(i))?;
    source[from..].find(pattern).map(|i| from + i)
}
