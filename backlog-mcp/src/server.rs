//! MCP server implementation: catalog advertisement, presence-only argument
//! validation, and dispatch to the Backlog client.

use std::sync::Arc;

use backlog_api::{BacklogClient, BacklogError, GetIssueArgs, SearchIssuesArgs, UpdateIssueArgs};
use rmcp::model::{
  CallToolRequestParams, CallToolResult, Content, JsonObject, ListToolsResult, PaginatedRequestParams,
  ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::catalog;
use crate::error::ToolCallError;

#[derive(Clone)]
pub struct BacklogMcpServer {
  client: Arc<BacklogClient>,
  catalog: Arc<Vec<Tool>>,
}

impl BacklogMcpServer {
  pub fn new(client: BacklogClient) -> Self {
    Self {
      client: Arc::new(client),
      catalog: Arc::new(catalog::tools()),
    }
  }

  /// The full catalog as a single unpaginated page.
  fn list_tools_result(&self) -> ListToolsResult {
    ListToolsResult {
      tools: self.catalog.as_ref().clone(),
      next_cursor: None,
      meta: None,
    }
  }

  /// Validate and execute one tool invocation.
  ///
  /// Split out from the `ServerHandler` impl so tests can drive it without
  /// a live transport. Each invocation is stateless and independent.
  async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> Result<CallToolResult, ToolCallError> {
    let tool = self
      .catalog
      .iter()
      .find(|t| t.name == name)
      .ok_or_else(|| ToolCallError::UnknownTool(name.to_string()))?;

    debug!(tool = name, "dispatching tool call");

    // getProjects takes no arguments and must succeed when none are given.
    if name == "getProjects" {
      return text_result(name, self.client.get_projects().await);
    }

    let arguments = arguments.ok_or(ToolCallError::MissingArguments)?;
    check_required(tool, &arguments)?;

    match name {
      "searchIssues" => {
        let args: SearchIssuesArgs = decode(name, arguments)?;
        text_result(name, self.client.search_issues(&args).await)
      }
      "getIssue" => {
        let args: GetIssueArgs = decode(name, arguments)?;
        text_result(name, self.client.get_issue(&args).await)
      }
      "updateIssue" => {
        let args: UpdateIssueArgs = decode(name, arguments)?;
        text_result(name, self.client.update_issue(&args).await)
      }
      other => Err(ToolCallError::UnknownTool(other.to_string())),
    }
  }
}

impl ServerHandler for BacklogMcpServer {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      instructions: Some(
        "Backlog MCP server. Exposes project listing, issue search, issue \
         lookup, and issue updates for the configured Backlog space."
          .into(),
      ),
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      ..Default::default()
    }
  }

  async fn list_tools(
    &self,
    _request: Option<PaginatedRequestParams>,
    _ctx: RequestContext<RoleServer>,
  ) -> Result<ListToolsResult, McpError> {
    Ok(self.list_tools_result())
  }

  async fn call_tool(
    &self,
    request: CallToolRequestParams,
    _ctx: RequestContext<RoleServer>,
  ) -> Result<CallToolResult, McpError> {
    let CallToolRequestParams { name, arguments, .. } = request;
    self.dispatch(&name, arguments).await.map_err(|e| {
      tracing::error!(tool = %name, error = %e, "tool call failed");
      McpError::from(e)
    })
  }
}

/// Presence-only validation against the tool's declared `required` list.
///
/// Deeper type or shape checks are deliberately not performed; values flow
/// through to the backend as supplied.
fn check_required(tool: &Tool, arguments: &JsonObject) -> Result<(), ToolCallError> {
  let required = tool
    .input_schema
    .get("required")
    .and_then(Value::as_array)
    .map(Vec::as_slice)
    .unwrap_or_default();

  for field in required.iter().filter_map(Value::as_str) {
    if !arguments.contains_key(field) {
      return Err(ToolCallError::MissingField {
        tool: tool.name.to_string(),
        field: field.to_string(),
      });
    }
  }

  Ok(())
}

/// Decode presence-validated arguments into the backend's argument struct.
fn decode<T: DeserializeOwned>(tool: &str, arguments: JsonObject) -> Result<T, ToolCallError> {
  serde_json::from_value(Value::Object(arguments)).map_err(|e| ToolCallError::Internal {
    tool: tool.to_string(),
    message: e.to_string(),
  })
}

/// Serialize a successful backend result as pretty-printed JSON text, or
/// wrap the failure with the name of the tool that was executing.
fn text_result<T: Serialize>(tool: &str, result: Result<T, BacklogError>) -> Result<CallToolResult, ToolCallError> {
  let wrap = |message: String| ToolCallError::Internal {
    tool: tool.to_string(),
    message,
  };
  let value = result.map_err(|e| wrap(e.to_string()))?;
  let json = serde_json::to_string_pretty(&value).map_err(|e| wrap(e.to_string()))?;
  Ok(CallToolResult::success(vec![Content::text(json)]))
}
