//! Declarations parsed from a scripting header.
//!
//! Entities are plain data: nothing holds a reference back to its container,
//! and the only field that changes after parsing is the rewrite target of a
//! [`TypeRef`].

mod enums;
mod interface;
mod types;

pub use enums::{EnumDeclaration, EnumMember, MemberValue};
pub use interface::{
    Argument, DeclKind, FunctionDeclaration, InterfaceDeclaration, Parameter, PropertyDeclaration,
};
pub use types::TypeRef;

/// Everything found in one header, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub enums: Vec<EnumDeclaration>,
    pub interfaces: Vec<InterfaceDeclaration>,
}

impl Header {
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.interfaces.is_empty()
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceDeclaration> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&EnumDeclaration> {
        self.enums.iter().find(|e| e.name == name)
    }
}
