//! Line-delimited JSON-RPC 2.0 tool server (the MCP tool subset).
//!
//! One request object per input line, one response line per request. Requests
//! without an `id` are notifications and never get a response.

pub mod tools;

use crate::config::SpamsenseConfig;
use crate::core::intent::IntentDetector;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tools::{CheckPhoneTool, DetectIntentTool, Tool};

pub const SERVER_NAME: &str = "spamsense/mcp";
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    fn ok(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

pub struct ToolServer {
    version: String,
    tools: Vec<Box<dyn Tool>>,
}

impl ToolServer {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            tools: Vec::new(),
        }
    }

    pub fn with_tool(mut self, tool: impl Tool + 'static) -> Self {
        self.tools.push(Box::new(tool));
        self
    }

    /// Registers the phone checker and the call-intent classifier.
    pub fn from_config(config: &SpamsenseConfig) -> Result<Self> {
        Ok(Self::new(env!("CARGO_PKG_VERSION"))
            .with_tool(CheckPhoneTool::new(config.build_analyzer()))
            .with_tool(DetectIntentTool::new(IntentDetector::new()?)))
    }

    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("SpamSense tool server running on stdio");
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                writer.write_all(frame.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        tracing::info!("input closed, shutting down");
        Ok(())
    }

    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("unparseable request: {}", e);
                return Some(RpcResponse::err(Value::Null, PARSE_ERROR, format!("Parse error: {}", e)));
            }
        };

        let fallback_id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: RpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(RpcResponse::err(
                    fallback_id,
                    INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                ))
            }
        };

        let Some(id) = request.id else {
            self.handle_notification(&request.method);
            return None;
        };

        tracing::debug!(method = %request.method, "handling request");
        Some(match self.dispatch(&request.method, request.params).await {
            Ok(result) => RpcResponse::ok(id, result),
            Err((code, message)) => RpcResponse::err(id, code, message),
        })
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" => tracing::info!("SpamSense tool client initialized"),
            other => tracing::debug!("ignoring notification {}", other),
        }
    }

    async fn dispatch(&self, method: &str, params: Value) -> std::result::Result<Value, (i64, String)> {
        match method {
            "initialize" => {
                let protocol = params
                    .get("protocolVersion")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_PROTOCOL_VERSION);
                Ok(json!({
                    "protocolVersion": protocol,
                    "capabilities": { "tools": {} },
                    "serverInfo": { "name": SERVER_NAME, "version": self.version },
                }))
            }
            "ping" => Ok(json!({})),
            "tools/list" => {
                let tools: Vec<_> = self.tools.iter().map(|t| t.definition()).collect();
                Ok(json!({ "tools": tools }))
            }
            "tools/call" => {
                let params: CallParams = serde_json::from_value(params)
                    .map_err(|e| (INVALID_PARAMS, format!("Invalid params: {}", e)))?;
                let result = self.call_tool(&params.name, params.arguments).await;
                serde_json::to_value(result).map_err(|e| (INTERNAL_ERROR, e.to_string()))
            }
            other => Err((METHOD_NOT_FOUND, format!("Method not found: {}", other))),
        }
    }

    async fn call_tool(&self, name: &str, args: Value) -> tools::CallToolResult {
        match self.tools.iter().find(|t| t.definition().name == name) {
            Some(tool) => tool.call(args).await,
            None => {
                tracing::warn!("unknown tool requested: {}", name);
                tools::CallToolResult::error(format!("Unknown tool: {}", name))
            }
        }
    }
}
