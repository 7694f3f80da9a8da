//! Emission options

/// Layout and naming choices for the generated Swift
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Number of spaces per indentation level (or tab width if using tabs)
    pub tab_size: usize,
    /// Use spaces for indentation (false = use tabs)
    pub insert_spaces: bool,
    /// Scripting object type every protocol is attached to via `extension`
    pub object_type: String,
    /// Raw type of the generated enums
    pub enum_raw_type: String,
    /// Return type for which no `-> T` clause is written
    pub void_type: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            object_type: "SBObject".to_string(),
            enum_raw_type: "AEKeyword".to_string(),
            void_type: "void".to_string(),
        }
    }
}

impl EmitOptions {
    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }
}
