//! Enum block parser
//!
//! ```text
//! enum MusicEPlS {
//!     MusicEPlSStopped = 'kPSS' /* comment */,
//!     MusicEPlSPlaying = 'kPSP',
//! };
//! ```

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use super::cursor::Cursor;
use super::lexer::{Token, TokenKind};
use super::segment::Block;
use crate::errors::{ErrorCode, SyntaxError};
use crate::syntax::{EnumDeclaration, EnumMember, MemberValue};

/// Parse a segmented enum block, reporting errors in document coordinates
pub fn parse_enum_block(block: Block<'_>) -> Result<EnumDeclaration, SyntaxError> {
    parse_enum(block.text).map_err(|err| err.shifted(block.offset))
}

/// Parse `enum NAME { IDENT = VALUE, ... };`
pub fn parse_enum(text: &str) -> Result<EnumDeclaration, SyntaxError> {
    let mut cursor = Cursor::new(text);
    let header_error = || {
        SyntaxError::from_code(ErrorCode::E0103, TextRange::up_to(TextSize::of(text)))
            .with_snippet(text)
            .with_hint("expected `enum <identifier> {`")
    };

    match cursor.eat(TokenKind::Ident) {
        Some(keyword) if keyword.text == "enum" => {}
        _ => return Err(header_error()),
    }
    cursor.skip_whitespace();
    let name = cursor.eat(TokenKind::Ident).ok_or_else(header_error)?;
    cursor.skip_whitespace();
    let open = cursor.eat(TokenKind::LBrace).ok_or_else(header_error)?;

    let body_start = open.end();
    let body_end = text
        .rfind("};")
        .map(|i| TextSize::new(i as u32))
        .filter(|&end| end >= body_start)
        .ok_or_else(|| {
            SyntaxError::from_code(ErrorCode::E0101, TextRange::up_to(TextSize::of(text)))
                .with_snippet(text)
        })?;

    let body = &text[TextRange::new(body_start, body_end)];
    let members = parse_members(name.text, body).map_err(|err| err.shifted(body_start))?;

    debug!(name = name.text, members = members.len(), "parsed enum");
    Ok(EnumDeclaration {
        name: SmolStr::new(name.text),
        members,
    })
}

fn parse_members(enum_name: &str, body: &str) -> Result<Vec<EnumMember>, SyntaxError> {
    let mut cursor = Cursor::new(body);
    let mut members = Vec::new();

    loop {
        cursor.skip_trivia();
        if cursor.at_eof() {
            break;
        }
        if cursor.eat(TokenKind::Comma).is_some() {
            continue;
        }

        let start = cursor.offset();
        let member_error = |cursor: &Cursor<'_>, message: String| {
            let snippet = member_text(body, start);
            SyntaxError::new(message, TextRange::new(start, cursor.offset().max(start)), ErrorCode::E0201)
                .with_snippet(snippet)
                .with_hint("expected `IDENTIFIER = VALUE` separated by commas")
        };

        let Some(identifier) = cursor.eat(TokenKind::Ident) else {
            let found = cursor.current().map_or("", |t| t.text);
            return Err(member_error(&cursor, format!("expected enum member, found `{found}`")));
        };
        cursor.skip_trivia();
        if cursor.eat(TokenKind::Eq).is_none() {
            return Err(member_error(
                &cursor,
                format!("expected `=` after `{}`", identifier.text),
            ));
        }
        cursor.skip_trivia();

        // The value runs to the next comma outside parentheses; trailing
        // comments are not part of it
        let value_start = cursor.offset();
        let mut value_end = value_start;
        let mut value_tokens = Vec::new();
        let mut depth = 0usize;
        while let Some(token) = cursor.current().copied() {
            match token.kind {
                TokenKind::Comma if depth == 0 => break,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            if !token.kind.is_trivia() {
                value_end = token.end();
                value_tokens.push(token);
            }
            cursor.bump();
        }
        let literal = cursor.slice(value_start, value_end);
        if literal.is_empty() {
            return Err(member_error(
                &cursor,
                format!("missing value for `{}`", identifier.text),
            ));
        }

        let member = EnumMember {
            identifier: SmolStr::new(identifier.text),
            literal: literal.to_string(),
            short_name: short_name(enum_name, identifier.text),
            value: member_value(&value_tokens),
        };
        trace!(
            identifier = %member.identifier,
            short_name = %member.short_name,
            code = member.code(),
            "enum member"
        );
        members.push(member);
    }

    Ok(members)
}

/// Strip `enum_name` from the front of `identifier` and lower-case the
/// first remaining character; an identifier equal to the enum name keeps
/// its full spelling
pub fn short_name(enum_name: &str, identifier: &str) -> SmolStr {
    let rest = match identifier.strip_prefix(enum_name) {
        Some(rest) if !rest.is_empty() => rest,
        _ => identifier,
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => SmolStr::default(),
    }
}

/// `0x` followed by each character's code point as hex, first character
/// most significant
pub fn char_code(code: &str) -> String {
    let digits: String = code.chars().map(|c| format!("{:02x}", u32::from(c))).collect();
    format!("0x{digits}")
}

fn member_value(tokens: &[Token<'_>]) -> MemberValue {
    tokens
        .iter()
        .find(|t| t.kind == TokenKind::CharLiteral)
        .map(|t| &t.text[1..t.text.len() - 1])
        .filter(|inner| !inner.is_empty())
        .map_or(MemberValue::Unknown, |inner| MemberValue::CharCode(char_code(inner)))
}

/// Member text from `start` to the next separator or line end, for diagnostics
fn member_text(body: &str, start: TextSize) -> &str {
    let rest = &body[usize::from(start)..];
    let end = rest.find([',', '\n']).unwrap_or(rest.len());
    &rest[..end]
}
