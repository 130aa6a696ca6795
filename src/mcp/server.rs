//! MCP server that reads JSON-RPC 2.0 messages line by line and writes one
//! response line per request.

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::errors::{MmaDocError, Result};
use crate::mmadoc::MmaDoc;

use super::tools::{get_tool_definitions, handle_tool_call};
use super::transport::{ErrorCode, JsonRpcRequest, JsonRpcResponse};

/// MCP protocol revision announced during `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name announced during `initialize`.
pub const SERVER_NAME: &str = "mma-doc";

/// The MCP server wrapping an `MmaDoc` service.
pub struct McpServer {
    service: MmaDoc,
}

impl McpServer {
    pub fn new(service: MmaDoc) -> Self {
        Self { service }
    }

    /// Serves requests from stdin, writing responses to stdout, until stdin
    /// is closed.
    pub async fn run(&self) -> Result<()> {
        info!(engine = self.service.engine().executable(), "mcp server listening on stdio");
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serves requests from `reader` until end of input.
    ///
    /// Requests are handled one at a time in arrival order. A failure to
    /// write a response ends the loop with an error.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(line) {
                Ok(request) => self.handle_request(&request).await,
                Err(e) => {
                    warn!(error = %e, "unparsable request");
                    Some(JsonRpcResponse::error(
                        Value::Null,
                        ErrorCode::ParseError,
                        format!("failed to parse JSON-RPC request: {}", e),
                    ))
                }
            };

            if let Some(resp) = response {
                let mut output = serde_json::to_string(&resp)?;
                output.push('\n');
                if let Err(e) = write_line(&mut writer, &output).await {
                    error!(error = %e, "failed to write response");
                    return Err(e);
                }
            }
        }

        debug!("input closed, shutting down");
        Ok(())
    }

    /// Dispatches a parsed request to the appropriate handler.
    ///
    /// Returns `None` for notifications.
    pub async fn handle_request(&self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, id = %request.id, "request");
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => Some(self.handle_initialize(id)),
            "initialized" => None,
            m if m.starts_with("notifications/") => None,
            "ping" => Some(JsonRpcResponse::success(id, json!({}))),
            "tools/list" => Some(JsonRpcResponse::success(
                id,
                json!({ "tools": get_tool_definitions() }),
            )),
            "tools/call" => Some(self.handle_tools_call(id, request.params.as_ref()).await),
            _ if request.is_notification() => None,
            _ => Some(JsonRpcResponse::error(
                id,
                ErrorCode::MethodNotFound,
                format!("method not found: {}", request.method),
            )),
        }
    }

    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    async fn handle_tools_call(&self, id: Value, params: Option<&Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::error(
                id,
                ErrorCode::InvalidParams,
                "missing params for tools/call",
            );
        };

        let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                id,
                ErrorCode::InvalidParams,
                "missing 'name' in tools/call params",
            );
        };

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match handle_tool_call(&self.service, tool_name, arguments).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                let code = match e {
                    MmaDocError::UnknownTool(_) => ErrorCode::MethodNotFound,
                    MmaDocError::InvalidArguments { .. } => ErrorCode::InvalidParams,
                    _ => ErrorCode::InternalError,
                };
                warn!(tool = tool_name, error = %e, "tool call rejected");
                JsonRpcResponse::error(id, code, e.to_string())
            }
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
