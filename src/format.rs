//! Turns raw engine output into markdown for the caller.

use crate::types::{DocsRequest, SymbolsRequest};

/// Note appended to every documentation page.
///
/// Help text printed by the engine often contains front-end formatting
/// wrappers that must not end up in generated code.
pub const DISPLAY_FORM_NOTICE: &str = "**Notices for AI assistants: The Doc above may contain format related functions like `DisplayForm[...]` or some `*Box[...]` e.g. RowBox, StyleBox, they are NOT relevant for getting the final result and SHOULD NOT be included in your final code!!! The reason is because Mathematica will automatically render InputForm or StandardForm into this DisplayForm in their frontend, so the users are not supposed to see and use these 'format related functions'. So please ALWAYS FIRST convert the doc from this 'unrendered DisplayForm' format to StandardForm in your mind and always ONLY write your code in StandardForm to user.**";

/// Formats the result of a documentation lookup.
pub fn format_docs(request: &DocsRequest, result: &str) -> String {
    let symbol = &request.symbol;
    if result.is_empty() {
        return format!(
            "No documentation found for {}. Make sure the symbol exists and any required packages are specified.",
            symbol
        );
    }

    let mut out = String::new();
    out.push_str(&format!("# Documentation for `{}`\n\n", symbol));
    out.push_str("```\n");
    out.push_str(result);
    out.push_str("\n```\n\n");
    out.push_str(DISPLAY_FORM_NOTICE);
    out.push_str("\n\n");

    let packages = request.packages();
    let addons = request.addons();
    if !packages.is_empty() || !addons.is_empty() {
        out.push_str("\n*Documentation retrieved after loading:*\n");
        if !packages.is_empty() {
            out.push_str(&format!("- Packages: {}\n", packages.join(", ")));
        }
        if !addons.is_empty() {
            out.push_str(&format!("- Addons: {}\n", addons.join(", ")));
        }
    }

    out
}

/// Parses the engine's printed list of names, e.g. `{"Foo", "Bar"}`, into a
/// sorted list.
///
/// The parser is naive: names containing commas, quotes, or braces are split
/// or mangled. Empty tokens (as produced by `{}`) are dropped.
pub fn parse_symbol_list(raw: &str) -> Vec<String> {
    let mut symbols: Vec<String> = raw
        .trim_matches(|c: char| c == '{' || c == '}')
        .split(',')
        .map(|s| s.trim().trim_matches('"'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    symbols.sort();
    symbols
}

/// Formats the result of a package symbol listing.
///
/// An empty result, or one the invoker reported as an error, is returned as
/// an error message naming the package.
pub fn format_symbol_list(request: &SymbolsRequest, result: &str) -> String {
    let package = &request.package;
    if result.is_empty() || result.starts_with("Error") {
        return format!("Error listing symbols from package {}: {}", package, result);
    }

    let mut out = format!("# Symbols available in {}\n\n", package);
    for symbol in parse_symbol_list(result) {
        out.push_str(&format!("- `{}`\n", symbol));
    }

    let addons = request.addons();
    if !addons.is_empty() {
        out.push_str(&format!(
            "\n*Symbols listed after loading addons: {}*\n",
            addons.join(", ")
        ));
    }

    out
}
