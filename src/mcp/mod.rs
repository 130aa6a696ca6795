//! MCP (Model Context Protocol) server for Mathematica documentation lookups.
//!
//! Provides a JSON-RPC 2.0 interface over stdio exposing two tools:
//! `get_docs` and `list_package_symbols`.

/// MCP server implementation.
pub mod server;

/// Tool definitions and dispatch.
pub mod tools;

/// JSON-RPC 2.0 transport types.
pub mod transport;

pub use server::McpServer;
pub use tools::{get_tool_definitions, handle_tool_call, ToolDefinition};
pub use transport::{ErrorCode, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
