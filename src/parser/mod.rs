//! Parser for sdef-generated scripting headers
//!
//! ## Architecture
//!
//! ```text
//! Header text
//!     ↓
//! Segmentation → enum blocks, interface blocks (delimiter matching)
//!     ↓
//! Block parsers → EnumDeclaration / InterfaceDeclaration
//!     ↓               ↳ body lines: `-` → method, `@` → property
//! Lexer (logos) → Tokens consumed by the recursive-descent line grammars
//! ```
//!
//! Each parser reports errors relative to the text it was given; the
//! `*_block` entry points shift them into document coordinates.

mod cursor;
mod enums;
mod function;
mod interface;
mod lexer;
mod property;
mod segment;


pub use enums::{char_code, parse_enum, parse_enum_block, short_name};
pub use function::parse_function;
pub use interface::{HeaderLine, parse_header_line, parse_interface, parse_interface_block};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use property::parse_property;
pub use segment::{Block, Segments, enum_blocks, interface_blocks, segment};

use crate::errors::SyntaxError;
use crate::syntax::Header;

/// Segment `source` and parse every block, enums first
pub fn parse(source: &str) -> Result<Header, SyntaxError> {
    let segments = segment(source)?;
    let enums = segments
        .enums
        .into_iter()
        .map(parse_enum_block)
        .collect::<Result<Vec<_>, _>>()?;
    let interfaces = segments
        .interfaces
        .into_iter()
        .map(parse_interface_block)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Header { enums, interfaces })
}
