//! Method line parser
//!
//! Two forms, tried in order:
//!
//! ```text
//! - (ReturnType) selector;                             zero-argument
//! - (ReturnType) label1:(Type1)name1 label2:(Type2)name2;  keyword arguments
//! ```
//!
//! Anything after the terminating `;` (usually a comment) is ignored.

use text_size::{TextRange, TextSize};

use super::cursor::Cursor;
use super::lexer::TokenKind;
use crate::errors::{ErrorCode, SyntaxError};
use crate::syntax::{Argument, FunctionDeclaration, TypeRef};

const HINT: &str = "expected `- (Type) selector;` or `- (Type) label:(Type)name ...;`";

/// Parse one `- (...) ...;` method line
pub fn parse_function(line: &str) -> Result<FunctionDeclaration, SyntaxError> {
    let mut cursor = Cursor::new(line);
    let error = |cursor: &Cursor<'_>, message: &str| {
        SyntaxError::new(message, cursor.current_range(), ErrorCode::E0202)
            .with_snippet(line)
            .with_hint(HINT)
    };

    cursor.skip_whitespace();
    if cursor.eat(TokenKind::Minus).is_none() {
        return Err(error(&cursor, "method declaration must start with `-`"));
    }
    let return_type = parenthesized_type(&mut cursor)
        .ok_or_else(|| error(&cursor, "expected a parenthesized return type"))?;
    cursor.skip_whitespace();

    if let Some(selector) = zero_argument_selector(&mut cursor) {
        return Ok(FunctionDeclaration {
            return_type,
            arguments: vec![Argument::label_only(selector)],
        });
    }

    let mut arguments = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.eat(TokenKind::Semicolon).is_some() {
            break;
        }
        if cursor.at_eof() {
            return Err(error(&cursor, "missing `;` at the end of the method declaration"));
        }
        let label = cursor
            .eat(TokenKind::Ident)
            .ok_or_else(|| error(&cursor, "expected a selector keyword"))?;
        if cursor.eat(TokenKind::Colon).is_none() {
            return Err(error(&cursor, "expected `:` after the selector keyword"));
        }
        cursor.skip_whitespace();
        let ty = parenthesized_type(&mut cursor)
            .ok_or_else(|| error(&cursor, "expected a parenthesized parameter type"))?;
        cursor.skip_whitespace();
        let name = cursor
            .eat(TokenKind::Ident)
            .ok_or_else(|| error(&cursor, "expected a parameter name"))?;

        arguments.push(Argument::with_param(label.text, ty, name.text));
    }

    if arguments.is_empty() {
        return Err(SyntaxError::new(
            "method declaration has no selector",
            TextRange::up_to(TextSize::of(line)),
            ErrorCode::E0202,
        )
        .with_snippet(line)
        .with_hint(HINT));
    }

    Ok(FunctionDeclaration {
        return_type,
        arguments,
    })
}

/// `(Type)`: everything up to the first `)`, which must not be blank
fn parenthesized_type(cursor: &mut Cursor<'_>) -> Option<TypeRef> {
    let checkpoint = cursor.checkpoint();
    cursor.skip_whitespace();
    cursor.eat(TokenKind::LParen)?;
    let ty = cursor.take_until(TokenKind::RParen).filter(|ty| !ty.trim().is_empty());
    match ty {
        Some(ty) => {
            cursor.bump();
            Some(TypeRef::new(ty))
        }
        None => {
            cursor.rewind(checkpoint);
            None
        }
    }
}

/// `selector;` with no colon
fn zero_argument_selector<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let checkpoint = cursor.checkpoint();
    if let Some(selector) = cursor.eat(TokenKind::Ident) {
        cursor.skip_whitespace();
        if cursor.eat(TokenKind::Semicolon).is_some() {
            return Some(selector.text);
        }
    }
    cursor.rewind(checkpoint);
    None
}
