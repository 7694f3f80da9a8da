/// A declared type as written in the header, plus its Swift rewrite
///
/// The raw text is never modified; the rewrite pass only fills in
/// `target`, so the original spelling stays available for diagnostics
/// and the rewrite can be re-run against a different table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    raw: String,
    target: Option<String>,
}

impl TypeRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            target: None,
        }
    }

    /// Text exactly as it appeared in the header, surrounding spaces included
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Key under which this type is registered in the rewrite table
    pub fn key(&self) -> &str {
        self.raw.trim()
    }

    /// Rewritten type, if the rewrite pass has run
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
    }

    pub fn is_rewritten(&self) -> bool {
        self.target.is_some()
    }

    /// Type to print: the rewrite when present, the trimmed raw text otherwise
    pub fn rendered(&self) -> &str {
        self.target.as_deref().unwrap_or_else(|| self.key())
    }
}
