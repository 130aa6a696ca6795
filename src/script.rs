//! Builds the Wolfram Language scripts handed to the engine.
//!
//! Every script is a flat sequence of directives joined by `"; "`: the
//! optional `$LoadAddOns` assignment, the package imports in request order,
//! and finally the query. Names are inserted verbatim; malformed names are
//! left for the engine to reject.

use crate::types::{DocsRequest, SymbolsRequest};

/// Separator placed between directives.
pub const STATEMENT_SEPARATOR: &str = "; ";

/// Returns the `$LoadAddOns` assignment for `addons`, or `None` when there
/// is nothing to load.
pub fn addons_directive(addons: &[String]) -> Option<String> {
    if addons.is_empty() {
        return None;
    }
    let quoted: Vec<String> = addons.iter().map(|a| format!("\"{}\"", a)).collect();
    Some(format!("$LoadAddOns = {{{}}}", quoted.join(",")))
}

/// Returns the import directive for a package's context.
pub fn import_directive(package: &str) -> String {
    format!("<< {}`", package)
}

/// Returns the help query for a symbol.
pub fn help_query(symbol: &str) -> String {
    format!("?{}", symbol)
}

/// Returns the query listing every name in a package's context.
pub fn names_query(package: &str) -> String {
    format!("Names[\"{}`*\"]", package)
}

/// Builds the script for a documentation lookup.
pub fn build_docs_script(request: &DocsRequest) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.extend(addons_directive(request.addons()));
    parts.extend(request.packages().iter().map(|p| import_directive(p)));
    parts.push(help_query(&request.symbol));
    parts.join(STATEMENT_SEPARATOR)
}

/// Builds the script for a package symbol listing.
pub fn build_symbols_script(request: &SymbolsRequest) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.extend(addons_directive(request.addons()));
    parts.push(import_directive(&request.package));
    parts.push(names_query(&request.package));
    parts.join(STATEMENT_SEPARATOR)
}
