use mma_doc::script::*;
use mma_doc::types::{DocsRequest, SymbolsRequest};

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_docs_script_bare_symbol() {
    assert_eq!(build_docs_script(&DocsRequest::new("Plot")), "?Plot");
}

#[test]
fn test_docs_script_directive_order() {
    let request = DocsRequest {
        symbol: "Plot".to_string(),
        packages: strings(&["A", "B"]),
        load_addons: strings(&["X"]),
    };
    assert_eq!(
        build_docs_script(&request),
        "$LoadAddOns = {\"X\"}; << A`; << B`; ?Plot"
    );
}

#[test]
fn test_docs_script_empty_lists_are_ignored() {
    let request = DocsRequest {
        symbol: "Integrate".to_string(),
        packages: Some(Vec::new()),
        load_addons: Some(Vec::new()),
    };
    assert_eq!(build_docs_script(&request), "?Integrate");
}

#[test]
fn test_docs_script_passes_names_through() {
    let request = DocsRequest {
        symbol: "Weird Name[".to_string(),
        packages: strings(&["Not A Package"]),
        load_addons: None,
    };
    assert_eq!(
        build_docs_script(&request),
        "<< Not A Package`; ?Weird Name["
    );
}

#[test]
fn test_symbols_script_without_addons() {
    assert_eq!(
        build_symbols_script(&SymbolsRequest::new("FeynCalc")),
        "<< FeynCalc`; Names[\"FeynCalc`*\"]"
    );
}

#[test]
fn test_symbols_script_with_addons() {
    let request = SymbolsRequest {
        package: "FeynCalc".to_string(),
        load_addons: strings(&["FeynArts", "FeynHelpers"]),
    };
    assert_eq!(
        build_symbols_script(&request),
        "$LoadAddOns = {\"FeynArts\",\"FeynHelpers\"}; << FeynCalc`; Names[\"FeynCalc`*\"]"
    );
}
