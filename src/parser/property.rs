//! Property line parser
//!
//! ```text
//! @property (copy, readonly) NSString *name;  // comment
//! @property NSInteger index;
//! ```

use smol_str::SmolStr;

use super::cursor::Cursor;
use super::lexer::TokenKind;
use crate::base::FxIndexSet;
use crate::errors::{ErrorCode, SyntaxError};
use crate::syntax::{PropertyDeclaration, TypeRef};

const HINT: &str = "expected `@property (attributes) Type name;`";

/// Parse one `@property ...;` line
pub fn parse_property(line: &str) -> Result<PropertyDeclaration, SyntaxError> {
    let mut cursor = Cursor::new(line);
    let error = |cursor: &Cursor<'_>, code: ErrorCode, message: &str| {
        SyntaxError::new(message, cursor.current_range(), code)
            .with_snippet(line)
            .with_hint(HINT)
    };

    cursor.skip_whitespace();
    match cursor.current() {
        Some(token) if token.kind == TokenKind::AtKeyword && token.text == "@property" => {
            cursor.bump();
        }
        _ => return Err(error(&cursor, ErrorCode::E0203, "expected `@property`")),
    }
    cursor.skip_whitespace();

    let mut attributes = FxIndexSet::default();
    if cursor.eat(TokenKind::LParen).is_some() {
        let list = cursor.take_until(TokenKind::RParen).ok_or_else(|| {
            error(&cursor, ErrorCode::E0204, "attribute list is missing its `)`")
        })?;
        cursor.bump();
        attributes.extend(
            list.split(',')
                .map(str::trim)
                .filter(|flag| !flag.is_empty())
                .map(SmolStr::new),
        );
        cursor.skip_whitespace();
    }

    // `<Type><name>;` where the name is the identifier right before `;`
    let type_start = cursor.offset();
    let mut last = None;
    while let Some(token) = cursor.current().copied() {
        if token.kind == TokenKind::Semicolon {
            break;
        }
        last = Some(token);
        cursor.bump();
    }
    if cursor.at_eof() {
        return Err(error(&cursor, ErrorCode::E0203, "missing `;` at the end of the property"));
    }
    let Some(name) = last.filter(|token| token.kind == TokenKind::Ident) else {
        return Err(error(&cursor, ErrorCode::E0203, "expected a property name before `;`"));
    };
    let ty = cursor.slice(type_start, name.offset);
    if ty.trim().is_empty() {
        return Err(error(&cursor, ErrorCode::E0203, "missing property type"));
    }

    Ok(PropertyDeclaration {
        ty: TypeRef::new(ty),
        attributes,
        name: SmolStr::new(name.text),
    })
}
