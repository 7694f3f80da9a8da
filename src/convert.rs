//! Conversion pipeline
//!
//! ```text
//! parse → collect types → build table → normalize inheritance → apply → emit
//! ```
//!
//! Every stage runs to completion before the next starts. Any error aborts the
//! run and no text is produced.

use tracing::debug;

use crate::base::LineIndex;
use crate::emit::{EmitOptions, Emitter};
use crate::errors::ConvertError;
use crate::parser;
use crate::semantic::{Heuristics, TypeCatalog, TypeRewriteTable, normalize_inheritance};
use crate::syntax::Header;

/// Everything configurable about a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub heuristics: Heuristics,
    pub emit: EmitOptions,
}

/// Result of a successful run: the rewritten declarations, the table used to
/// rewrite them, and the generated Swift
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub header: Header,
    pub table: TypeRewriteTable,
    pub output: String,
}

/// Parse `source`, attaching a line/column position to any syntax error
pub fn parse_header(source: &str) -> Result<Header, ConvertError> {
    parser::parse(source).map_err(|err| err.located(&LineIndex::new(source)).into())
}

/// Convert a header to Swift with the default options
pub fn convert(source: &str) -> Result<String, ConvertError> {
    convert_with(source, &ConvertOptions::default()).map(|conversion| conversion.output)
}

/// Convert a header to Swift
pub fn convert_with(source: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let mut header = parse_header(source)?;
    debug!(
        enums = header.enums.len(),
        interfaces = header.interfaces.len(),
        "parsed header"
    );

    let table = TypeCatalog::collect(&header.interfaces).build(&options.heuristics);
    normalize_inheritance(&mut header.interfaces, &options.heuristics);
    table.apply(&mut header.interfaces)?;

    let output = Emitter::new(&options.emit).emit_header(&header);
    debug!(bytes = output.len(), "emitted swift");

    Ok(Conversion {
        header,
        table,
        output,
    })
}
