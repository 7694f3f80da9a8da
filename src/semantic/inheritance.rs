//! Inheritance normalization
//!
//! Works on the header line as written (`Base <P1, P2>`), not on rewritten
//! types; the rewrite table never sees inherited names.

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::heuristics::Heuristics;
use crate::syntax::InterfaceDeclaration;

/// Render an inherited base and its protocol list as `Base <P1, P2>`
pub fn inheritance_expression(inherits: Option<&str>, protocols: &[SmolStr]) -> Option<String> {
    let list = protocols.iter().map(SmolStr::as_str).collect::<Vec<_>>().join(", ");
    match (inherits, list.is_empty()) {
        (None, true) => None,
        (Some(base), true) => Some(base.to_string()),
        (None, false) => Some(format!("<{list}>")),
        (Some(base), false) => Some(format!("{base} <{list}>")),
    }
}

/// Collapse matching inheritance expressions, then clear root bases.
/// Returns how many interfaces changed.
pub fn normalize_inheritance(
    interfaces: &mut [InterfaceDeclaration],
    heuristics: &Heuristics,
) -> usize {
    let mut changed = 0;
    for interface in interfaces.iter_mut() {
        let before = interface.inherits.clone();

        let expression = inheritance_expression(interface.inherits.as_deref(), &interface.protocols);
        if let Some(parent) = expression.as_deref().and_then(|e| heuristics.collapse(e)) {
            interface.inherits = Some(SmolStr::new(parent));
        }
        if interface.inherits.as_deref().is_some_and(|base| heuristics.is_root_base(base)) {
            interface.inherits = None;
        }

        if interface.inherits != before {
            trace!(
                interface = %interface.name,
                from = ?before,
                to = ?interface.inherits,
                "normalized inheritance"
            );
            changed += 1;
        }
    }
    debug!(changed, "normalized inheritance");
    changed
}
