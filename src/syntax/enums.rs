use smol_str::SmolStr;

/// `enum NAME { ... };` from the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: SmolStr,
    pub members: Vec<EnumMember>,
}

/// One `IDENT = VALUE` entry of an enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Identifier as written, e.g. `MusicEPlSPlaying`
    pub identifier: SmolStr,
    /// Value text as written, e.g. `'kPSP'`
    pub literal: String,
    /// Identifier without the enum-name prefix, first character lower-cased
    pub short_name: SmolStr,
    pub value: MemberValue,
}

/// How a member's value was understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValue {
    /// A quoted four-char code, with its `0x...` rendering
    CharCode(String),
    /// Anything else; kept, but with no derived code
    Unknown,
}

impl MemberValue {
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::CharCode(code) => Some(code),
            Self::Unknown => None,
        }
    }

    pub fn is_char_code(&self) -> bool {
        matches!(self, Self::CharCode(_))
    }
}

impl EnumMember {
    /// Derived code, empty for members whose value is not a char code
    pub fn code(&self) -> &str {
        self.value.code().unwrap_or("")
    }
}
