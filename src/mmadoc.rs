use tracing::info;

use crate::config::MmaDocConfig;
use crate::engine::Engine;
use crate::format::{format_docs, format_symbol_list};
use crate::script::{build_docs_script, build_symbols_script};
use crate::types::{DocsRequest, SymbolsRequest};

/// Entry point for the two lookup operations.
///
/// Each call builds a fresh script, runs a cold engine session, and formats
/// the output. Failures are reported inside the returned text.
#[derive(Debug, Clone)]
pub struct MmaDoc {
    engine: Engine,
}

impl MmaDoc {
    /// Creates a service that runs lookups through `engine`.
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Creates a service from the loaded configuration.
    pub fn from_config(config: &MmaDocConfig) -> Self {
        Self::new(Engine::from_config(config))
    }

    /// The engine used for lookups.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the documentation of a symbol as markdown.
    pub async fn get_docs(&self, request: &DocsRequest) -> String {
        info!(symbol = %request.symbol, "documentation lookup");
        let script = build_docs_script(request);
        let result = self.engine.run_text(&script).await;
        format_docs(request, &result)
    }

    /// Returns the sorted symbols of a package as a markdown list.
    pub async fn list_package_symbols(&self, request: &SymbolsRequest) -> String {
        info!(package = %request.package, "symbol listing");
        let script = build_symbols_script(request);
        let result = self.engine.run_text(&script).await;
        format_symbol_list(request, &result)
    }
}
