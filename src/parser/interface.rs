//! Interface/protocol block parser
//!
//! ```text
//! @interface MusicTrack : MusicItem
//! @property (copy, readonly) NSString *album;
//! - (void) reveal;
//! @end
//! ```
//!
//! The header line is `NAME[ : INHERITS[ <Proto1, Proto2>]]`. Body lines are
//! dispatched on their first non-whitespace character: `-` is a method, `@`
//! is a property, anything else is skipped.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::debug;

use super::function::parse_function;
use super::lexer::{TokenKind, tokenize};
use super::property::parse_property;
use super::segment::{Block, INTERFACE_END};
use crate::errors::{ErrorCode, SyntaxError};
use crate::syntax::{DeclKind, InterfaceDeclaration};

/// Name, superclass and protocol list from the line after `@interface`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    pub name: SmolStr,
    pub inherits: Option<SmolStr>,
    pub protocols: Vec<SmolStr>,
}

/// Parse a segmented interface block, reporting errors in document coordinates
pub fn parse_interface_block(block: Block<'_>) -> Result<InterfaceDeclaration, SyntaxError> {
    parse_interface(block.text).map_err(|err| err.shifted(block.offset))
}

/// Parse `@protocol|@interface <header-line> ... @end`
pub fn parse_interface(text: &str) -> Result<InterfaceDeclaration, SyntaxError> {
    let whole = TextRange::up_to(TextSize::of(text));
    let kind = DeclKind::from_prefix(text).ok_or_else(|| {
        SyntaxError::new("expected `@interface` or `@protocol`", whole, ErrorCode::E0104)
            .with_snippet(text)
    })?;

    let header_start = kind.keyword().len();
    let unterminated = || SyntaxError::from_code(ErrorCode::E0102, whole).with_snippet(text);
    let header_end = text
        .get(header_start + 1..)
        .and_then(|rest| rest.find('\n'))
        .map(|i| header_start + 1 + i)
        .ok_or_else(unterminated)?;
    let body_end = text
        .rfind(INTERFACE_END)
        .filter(|&end| end >= header_end)
        .ok_or_else(unterminated)?;

    let header = parse_header_line(&text[header_start..header_end])
        .map_err(|err| err.shifted(TextSize::new(header_start as u32)))?;

    let mut properties = Vec::new();
    let mut functions = Vec::new();
    let mut offset = header_end;
    for raw_line in text[header_end..body_end].split_inclusive('\n') {
        let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        let line_offset = TextSize::new(offset as u32);
        let shift = move |err: SyntaxError| err.shifted(line_offset);
        match line.trim_start().chars().next() {
            Some('-') => functions.push(parse_function(line).map_err(shift)?),
            Some('@') => properties.push(parse_property(line).map_err(shift)?),
            _ => {}
        }
        offset += raw_line.len();
    }

    debug!(
        kind = %kind,
        name = %header.name,
        properties = properties.len(),
        functions = functions.len(),
        "parsed interface"
    );
    Ok(InterfaceDeclaration {
        kind,
        name: header.name,
        inherits: header.inherits,
        protocols: header.protocols,
        properties,
        functions,
    })
}

/// Split the header line on its first colon; the right side may carry a
/// `<...>` protocol list, and what remains outside the brackets is the
/// inherited type
pub fn parse_header_line(header: &str) -> Result<HeaderLine, SyntaxError> {
    let (lhs, rhs) = match header.split_once(':') {
        Some((lhs, rhs)) => (lhs, Some(rhs)),
        None => (header, None),
    };

    let name = lhs.trim();
    if !is_identifier(name) {
        let message = if name.is_empty() {
            "missing interface name".to_string()
        } else {
            format!("interface name `{name}` is not a single identifier")
        };
        return Err(
            SyntaxError::new(message, TextRange::up_to(TextSize::of(lhs)), ErrorCode::E0104)
                .with_snippet(header)
                .with_hint("expected `Name[ : Inherits[ <Protocol, ...>]]`"),
        );
    }

    let (inherits, protocols) = match rhs {
        Some(rhs) => split_inheritance(rhs),
        None => (None, Vec::new()),
    };

    Ok(HeaderLine {
        name: SmolStr::new(name),
        inherits,
        protocols,
    })
}

fn split_inheritance(rhs: &str) -> (Option<SmolStr>, Vec<SmolStr>) {
    // `<` followed by at least one character and then `>`
    let brackets = rhs.find('<').and_then(|open| {
        rhs.get(open + 2..)
            .and_then(|rest| rest.find('>'))
            .map(|i| (open, open + 2 + i))
    });

    let (outside, protocols) = match brackets {
        Some((open, close)) => {
            let protocols = rhs[open + 1..close]
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(SmolStr::new)
                .collect();
            (format!("{}{}", &rhs[..open], &rhs[close + 1..]), protocols)
        }
        None => (rhs.to_string(), Vec::new()),
    };

    let inherits = Some(outside.trim()).filter(|s| !s.is_empty()).map(SmolStr::new);
    (inherits, protocols)
}

fn is_identifier(text: &str) -> bool {
    matches!(tokenize(text).as_slice(), [token] if token.kind == TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("MusicApplication"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("Music Application"));
        assert!(!is_identifier("Foo <Bar>"));
    }

    #[test]
    fn test_split_inheritance_with_protocols() {
        let (inherits, protocols) = split_inheritance(" SBObject <MusicGenericMethods, Other>");
        assert_eq!(inherits.as_deref(), Some("SBObject"));
        assert_eq!(protocols, vec!["MusicGenericMethods", "Other"]);
    }

    #[test]
    fn test_split_inheritance_plain() {
        let (inherits, protocols) = split_inheritance(" SBApplication");
        assert_eq!(inherits.as_deref(), Some("SBApplication"));
        assert!(protocols.is_empty());
    }

    #[test]
    fn test_split_inheritance_only_protocols() {
        let (inherits, protocols) = split_inheritance(" <MusicGenericMethods>");
        assert_eq!(inherits, None);
        assert_eq!(protocols, vec!["MusicGenericMethods"]);
    }
}
