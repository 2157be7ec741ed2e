//! Line-oriented JSON-RPC server over stdin/stdout.

use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::error::{McpError, McpResult};
use super::jsonrpc::{JsonRpcError, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse};
use super::protocol::{
    InitializeParams, InitializeResult, ServerCapabilities, ServerInfo, ToolCallParams,
    ToolCallResult, ToolsCapability, ToolsListResult, MCP_PROTOCOL_VERSION, SERVER_NAME,
    SUPPORTED_PROTOCOL_VERSIONS,
};
use super::tools::{call_tool, tool_definitions};
use crate::generator::ComponentGenerator;
use crate::linter::ComponentValidator;

/// Tool server over newline-delimited JSON-RPC.
#[derive(Debug, Default)]
pub struct McpServer {
    generator: ComponentGenerator,
    validator: ComponentValidator,
}

impl McpServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(generator: ComponentGenerator) -> Self {
        Self {
            generator,
            validator: ComponentValidator::new(),
        }
    }

    /// Serve until `reader` reaches EOF. Blank lines are skipped.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> McpResult<()> {
        info!(protocol = MCP_PROTOCOL_VERSION, "Tool server ready on stdio");
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(reply) = self.handle_line(line) {
                writer.write_all(reply.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
        }
        info!("EOF on stdin, tool server stopped");
        Ok(())
    }

    /// Handle one message. Returns the serialized reply, or `None` for notifications.
    pub fn handle_line(&self, line: &str) -> Option<String> {
        debug!(bytes = line.len(), "Message received");

        let raw: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Unparseable message");
                return Some(error_line(Value::Null, &McpError::Parse(e)));
            }
        };
        let id = raw.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                return Some(error_line(id, &McpError::InvalidRequest(e.to_string())));
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        match self.dispatch(&request) {
            Ok(result) => Some(to_line(&JsonRpcResponse::new(id, result))),
            Err(e) => {
                warn!(method = %request.method, error = %e, "Request failed");
                Some(error_line(id, &e))
            }
        }
    }

    fn dispatch(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        let params = request.params.clone().unwrap_or(Value::Null);
        match request.method.as_str() {
            "initialize" => {
                let params: InitializeParams = if params.is_null() {
                    InitializeParams::default()
                } else {
                    serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?
                };
                to_value(&self.initialize(&params))
            }
            "ping" => Ok(json!({})),
            "tools/list" => to_value(&ToolsListResult {
                tools: tool_definitions(),
            }),
            "tools/call" => {
                let params: ToolCallParams =
                    serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;
                to_value(&self.call_tool(&params))
            }
            other => Err(McpError::MethodNotFound(other.to_string())),
        }
    }

    /// Answer with the client's revision when supported, otherwise the latest.
    pub fn initialize(&self, params: &InitializeParams) -> InitializeResult {
        let protocol_version = params
            .protocol_version
            .as_deref()
            .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(v))
            .unwrap_or(MCP_PROTOCOL_VERSION)
            .to_string();
        if let Some(client) = &params.client_info {
            info!(client = %client.name, protocol = %protocol_version, "Client initialized");
        }
        InitializeResult {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: false },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn call_tool(&self, params: &ToolCallParams) -> ToolCallResult {
        let arguments = params.arguments.clone().unwrap_or_else(|| json!({}));
        match call_tool(&self.generator, &self.validator, &params.name, &arguments) {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                warn!(tool = %params.name, error = %e, "Tool failed");
                ToolCallResult::error(e)
            }
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::Internal(e.to_string()))
}

fn to_line<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": { "code": -32603, "message": format!("Internal error: {e}") }
        })
        .to_string()
    })
}

fn error_line(id: Value, error: &McpError) -> String {
    let message = match error {
        McpError::Parse(_) => "Parse error".to_string(),
        other => other.to_string(),
    };
    to_line(&JsonRpcErrorResponse::new(
        id,
        JsonRpcError::new(error.error_code(), message),
    ))
}
