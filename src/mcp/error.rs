//! Error types for the stdio tool server

use thiserror::Error;

use super::jsonrpc::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use crate::generator::GenerateError;
use crate::spec::SchemaError;

pub type McpResult<T> = Result<T, McpError>;

/// Protocol-level failures, reported as JSON-RPC errors.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid JSON-RPC request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl McpError {
    /// JSON-RPC error code for this failure.
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::Parse(_) => PARSE_ERROR,
            McpError::InvalidRequest(_) => INVALID_REQUEST,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::Io(_) | McpError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

/// Tool failures. These become `Error: ...` text results, not JSON-RPC errors.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}
