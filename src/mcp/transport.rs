//! JSON-RPC 2.0 message types for the MCP server.
//!
//! Messages are exchanged one per line over stdio.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC protocol version string.
pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request or notification received from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version; expected to be `"2.0"`.
    pub jsonrpc: String,
    /// Request identifier. Null or absent for notifications.
    #[serde(default)]
    pub id: Value,
    /// The RPC method name.
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Returns true for messages that expect no response.
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }
}

/// A JSON-RPC 2.0 response sent back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Creates a successful response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Creates an error response.
    pub fn error(id: Value, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code: code.as_i32(),
                message: message.into(),
                data: None,
            }),
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Standard JSON-RPC 2.0 error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
}

impl ErrorCode {
    /// Returns the numeric code defined by JSON-RPC 2.0.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_tools_call_request() {
        let msg = json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": { "name": "get_docs", "arguments": { "symbol": "Plot" } }
        });

        let request: JsonRpcRequest = serde_json::from_value(msg).unwrap();
        assert_eq!(request.method, "tools/call");
        assert_eq!(request.id, json!(7));
        assert!(!request.is_notification());
        assert_eq!(request.params.unwrap()["arguments"]["symbol"], "Plot");
    }

    #[test]
    fn test_notification_has_null_id() {
        let msg = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });

        let request: JsonRpcRequest = serde_json::from_value(msg).unwrap();
        assert!(request.is_notification());
        assert!(request.params.is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let response = JsonRpcResponse::error(json!("a-1"), ErrorCode::InvalidParams, "bad");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"]["code"], -32602);
        assert_eq!(value["id"], "a-1");
        assert!(value.get("result").is_none());
        assert!(value["error"].get("data").is_none());
    }

    #[test]
    fn test_success_response_omits_error() {
        let response = JsonRpcResponse::success(json!(1), json!({}));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(!json.contains("\"error\""));
    }
}
