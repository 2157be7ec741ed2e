//! # Stdio tool server
//!
//! Exposes the generator and validator as tools over newline-delimited
//! JSON-RPC 2.0 on stdin/stdout. Each line is one message; replies are
//! written one per line and flushed immediately. Logging goes to stderr so
//! stdout carries protocol traffic only.
//!
//! Supported methods: `initialize`, `ping`, `tools/list` and `tools/call`.
//! Notifications (messages without an `id`) are accepted and never answered.
//!
//! Tool failures (bad arguments, unknown component type) are returned as a
//! normal result with `isError: true` and text `Error: {message}`. Only
//! protocol failures become JSON-RPC errors.

mod error;
mod jsonrpc;
mod protocol;
mod server;
mod tools;

pub use error::{McpError, McpResult, ToolError};
pub use jsonrpc::{
    JsonRpcError, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR,
    INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND, PARSE_ERROR,
};
pub use protocol::{
    ClientInfo, InitializeParams, InitializeResult, ServerCapabilities, ServerInfo, Tool,
    ToolCallParams, ToolCallResult, ToolContent, ToolsCapability, ToolsListResult,
    MCP_PROTOCOL_VERSION, SERVER_NAME, SUPPORTED_PROTOCOL_VERSIONS,
};
pub use server::McpServer;
pub use tools::{
    call_tool, tool_definitions, GENERATE_COMPONENT, GENERATE_COMPONENT_EXAMPLES,
    GET_COMPONENT_TEMPLATE, LIST_COMPONENT_TYPES, VALIDATE_COMPONENT,
};

/// Serve on the process's stdin/stdout until EOF.
pub fn serve_stdio() -> McpResult<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    McpServer::new().run(stdin.lock(), stdout.lock())
}
