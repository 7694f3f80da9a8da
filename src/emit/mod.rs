//! Swift emission
//!
//! Renders a rewritten [`Header`] as Swift declarations for use with
//! ScriptingBridge: every enum becomes an `@objc` enum over the Apple event
//! keyword type, every interface or protocol becomes an `@objc` protocol with
//! optional members, followed by an extension attaching it to the scripting
//! object type.
//!
//! All enums are written before all interfaces, each family in document
//! order. Types print their rewrite target, or their trimmed source text if
//! the rewrite pass has not run.

mod options;

#[cfg(test)]
mod tests;

pub use options::EmitOptions;

use crate::syntax::{
    Argument, EnumDeclaration, FunctionDeclaration, Header, InterfaceDeclaration,
    PropertyDeclaration,
};

/// Emit `header` with default options
pub fn emit(header: &Header) -> String {
    Emitter::new(&EmitOptions::default()).emit_header(header)
}

/// Renders declarations according to a set of [`EmitOptions`]
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    options: &'a EmitOptions,
}

impl<'a> Emitter<'a> {
    pub fn new(options: &'a EmitOptions) -> Self {
        Self { options }
    }

    /// All enums, then all interfaces
    pub fn emit_header(&self, header: &Header) -> String {
        let mut out = String::new();
        for declaration in &header.enums {
            out.push_str(&self.emit_enum(declaration));
        }
        for declaration in &header.interfaces {
            out.push_str(&self.emit_interface(declaration));
        }
        out
    }

    pub fn emit_enum(&self, declaration: &EnumDeclaration) -> String {
        let indent = self.options.indent(1);
        let cases = declaration
            .members
            .iter()
            .map(|member| format!("{indent}case {} = {}", member.short_name, member.code()))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "@objc public enum {} : {} {{\n{cases}\n}};\n",
            declaration.name, self.options.enum_raw_type
        )
    }

    pub fn emit_interface(&self, declaration: &InterfaceDeclaration) -> String {
        let mut out = match &declaration.inherits {
            Some(parent) => format!("@objc public protocol {} : {parent} {{\n", declaration.name),
            None => format!("@objc public protocol {} {{\n", declaration.name),
        };
        for property in &declaration.properties {
            out.push_str(&self.emit_property(property));
            out.push('\n');
        }
        for function in &declaration.functions {
            out.push_str(&self.emit_function(function));
            out.push('\n');
        }
        out.push_str("}\n");
        out.push_str(&format!(
            "extension {}: {} {{}}\n",
            self.options.object_type, declaration.name
        ));
        out
    }

    /// Getter line, plus a setter line unless the property is readonly
    pub fn emit_property(&self, property: &PropertyDeclaration) -> String {
        let indent = self.options.indent(1);
        let name = &property.name;
        let ty = property.ty.rendered();
        let getter = format!("{indent}@objc optional var {name}: {ty} {{ get }}");
        if property.is_readonly() {
            return getter;
        }
        format!(
            "{getter}\n{indent}@objc optional func set{}(_ {name}: {ty})",
            capitalize(name)
        )
    }

    pub fn emit_function(&self, function: &FunctionDeclaration) -> String {
        let indent = self.options.indent(1);
        let params = parameter_list(&function.arguments).join(", ");
        let return_type = function.return_type.rendered();
        let ret = if return_type == self.options.void_type {
            ";".to_string()
        } else {
            format!(" -> {return_type};")
        };
        format!(
            "{indent}@objc optional func {}({params}){ret}",
            function.selector()
        )
    }
}

/// The first argument's label is the method name, so only its parameter is
/// listed; later labels are kept unless they repeat the parameter name
fn parameter_list(arguments: &[Argument]) -> Vec<String> {
    let mut params = Vec::with_capacity(arguments.len());
    let mut arguments = arguments.iter();
    if let Some(param) = arguments.next().and_then(|first| first.param.as_ref()) {
        params.push(format!("{}: {}", param.name, param.ty.rendered()));
    }
    for argument in arguments {
        let Some(param) = &argument.param else {
            continue;
        };
        if argument.label == param.name {
            params.push(format!("{}: {}", param.name, param.ty.rendered()));
        } else {
            params.push(format!(
                "{} {}: {}",
                argument.label,
                param.name,
                param.ty.rendered()
            ));
        }
    }
    params
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
