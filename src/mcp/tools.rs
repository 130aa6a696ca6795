//! MCP tool definitions and dispatch.
//!
//! Each tool maps to an `MmaDoc` operation. Engine failures are part of the
//! returned text; only malformed calls produce errors here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::{MmaDocError, Result};
use crate::mmadoc::MmaDoc;
use crate::types::{DocsRequest, SymbolsRequest};

/// Tool name of the documentation lookup.
pub const GET_DOCS: &str = "get_docs";

/// Tool name of the package symbol listing.
pub const LIST_PACKAGE_SYMBOLS: &str = "list_package_symbols";

/// A tool definition exposed by the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema describing the tool's input parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Returns the list of all tool definitions exposed by this MCP server.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_DOCS.to_string(),
            description: "Get documentation for a Mathematica symbol or function using the wolframscript CLI. Can optionally load packages and addons before looking up documentation.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "symbol": {
                        "type": "string",
                        "description": "The Mathematica symbol or function to look up (e.g., 'Plot', 'FCFeynmanParametrize')"
                    },
                    "packages": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Optional list of packages to load before looking up documentation (e.g., ['FeynCalc'])"
                    },
                    "load_addons": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Optional list of addons to load (e.g., ['FeynArts'])"
                    }
                },
                "required": ["symbol"]
            }),
        },
        ToolDefinition {
            name: LIST_PACKAGE_SYMBOLS.to_string(),
            description: "List all available symbols from a specific Mathematica package using the wolframscript CLI.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "package": {
                        "type": "string",
                        "description": "The Mathematica package to list symbols from (e.g., 'FeynCalc')"
                    },
                    "load_addons": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Optional list of addons to load before listing symbols (e.g., ['FeynArts'])"
                    }
                },
                "required": ["package"]
            }),
        },
    ]
}

/// Dispatches a tool call to the matching operation.
///
/// Returns the MCP `content` payload, or an error if the tool name is unknown
/// or the arguments do not match the tool's schema.
pub async fn handle_tool_call(service: &MmaDoc, tool_name: &str, args: Value) -> Result<Value> {
    let text = match tool_name {
        GET_DOCS => {
            let request: DocsRequest = parse_arguments(tool_name, args)?;
            service.get_docs(&request).await
        }
        LIST_PACKAGE_SYMBOLS => {
            let request: SymbolsRequest = parse_arguments(tool_name, args)?;
            service.list_package_symbols(&request).await
        }
        _ => return Err(MmaDocError::UnknownTool(tool_name.to_string())),
    };
    Ok(text_content(&text))
}

/// Wraps markdown in an MCP text content payload.
pub fn text_content(text: &str) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }]
    })
}

fn parse_arguments<T: DeserializeOwned>(tool_name: &str, args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|e| MmaDocError::InvalidArguments {
        tool: tool_name.to_string(),
        message: e.to_string(),
    })
}
