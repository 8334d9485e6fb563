//! Tool-call error taxonomy and its JSON-RPC mapping.

use rmcp::ErrorData as McpError;
use rmcp::model::ErrorCode;
use thiserror::Error;

/// Failures raised while validating or dispatching a tool invocation.
///
/// Validation variants are raised before any backend call; `Internal` wraps
/// everything that fails after validation, annotated with the tool that was
/// executing. Every failure is terminal for its invocation.
#[derive(Debug, Error)]
pub enum ToolCallError {
  /// The invocation named a tool outside the catalog.
  #[error("Unknown tool: {0}")]
  UnknownTool(String),

  /// The tool requires arguments and none were supplied.
  #[error("Arguments are required")]
  MissingArguments,

  /// A field the tool's schema marks required is absent. Presence is the
  /// only thing checked; values pass through to the backend as given.
  #[error("Missing required argument: {field}")]
  MissingField { tool: String, field: String },

  /// Catch-all for backend and dispatch failures.
  #[error("Error executing tool {tool}: {message}")]
  Internal { tool: String, message: String },
}

impl From<ToolCallError> for McpError {
  fn from(err: ToolCallError) -> Self {
    let code = match &err {
      ToolCallError::UnknownTool(_) => ErrorCode::METHOD_NOT_FOUND,
      ToolCallError::MissingArguments | ToolCallError::MissingField { .. } => ErrorCode::INVALID_PARAMS,
      ToolCallError::Internal { .. } => ErrorCode::INTERNAL_ERROR,
    };
    McpError::new(code, err.to_string(), None)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_protocol_error_codes() {
    let err: McpError = ToolCallError::UnknownTool("bogusTool".to_string()).into();
    assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
    assert!(err.message.contains("bogusTool"));

    let err: McpError = ToolCallError::MissingArguments.into();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

    let err: McpError = ToolCallError::MissingField {
      tool: "getIssue".to_string(),
      field: "issueId".to_string(),
    }
    .into();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("issueId"));

    let err: McpError = ToolCallError::Internal {
      tool: "searchIssues".to_string(),
      message: "Backlog API error: HTTP 500".to_string(),
    }
    .into();
    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("searchIssues"));
  }
}
