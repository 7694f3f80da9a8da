use std::fmt;

use smol_str::SmolStr;

use super::types::TypeRef;
use crate::base::FxIndexSet;

/// Keyword that opened the block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Protocol,
    Interface,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Interface => "interface",
        }
    }

    /// The kind whose keyword `text` starts with
    pub fn from_prefix(text: &str) -> Option<Self> {
        [Self::Protocol, Self::Interface]
            .into_iter()
            .find(|kind| text.starts_with(kind.keyword()))
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Protocol => "@protocol",
            Self::Interface => "@interface",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `@interface` or `@protocol` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDeclaration {
    pub kind: DeclKind,
    pub name: SmolStr,
    /// Superclass or refined protocol; `None` when the header has none or
    /// normalization removed it
    pub inherits: Option<SmolStr>,
    /// Names inside `<...>` on the header line
    pub protocols: Vec<SmolStr>,
    pub properties: Vec<PropertyDeclaration>,
    pub functions: Vec<FunctionDeclaration>,
}

/// `@property (attrs) Type name;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub ty: TypeRef,
    pub attributes: FxIndexSet<SmolStr>,
    pub name: SmolStr,
}

impl PropertyDeclaration {
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    pub fn is_readonly(&self) -> bool {
        self.has_attribute("readonly")
    }
}

/// `- (Return) label:(Type)name ...;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub return_type: TypeRef,
    /// Never empty; a zero-argument selector is a single label-only argument
    pub arguments: Vec<Argument>,
}

impl FunctionDeclaration {
    /// First selector keyword, which names the Swift method
    pub fn selector(&self) -> &str {
        self.arguments.first().map(|a| a.label.as_str()).unwrap_or("")
    }

    pub fn takes_arguments(&self) -> bool {
        self.arguments.iter().any(|a| a.param.is_some())
    }
}

/// One selector keyword and, unless the method takes no arguments, its parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub label: SmolStr,
    pub param: Option<Parameter>,
}

impl Argument {
    /// The label-only pseudo-argument of a zero-argument selector
    pub fn label_only(label: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            param: None,
        }
    }

    pub fn with_param(label: impl Into<SmolStr>, ty: TypeRef, name: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            param: Some(Parameter {
                ty,
                name: name.into(),
            }),
        }
    }
}

/// Declared type and parameter name; they only ever exist together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: TypeRef,
    pub name: SmolStr,
}
