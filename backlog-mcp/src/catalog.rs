//! Static tool catalog advertised to MCP clients.
//!
//! Four descriptors, constructed once at startup and immutable afterwards.
//! The input schemas double as the validation source: `call_tool` reads each
//! schema's `required` list to decide which fields must be present.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

/// Build the fixed four-tool catalog.
pub fn tools() -> Vec<Tool> {
  vec![
    Tool::new(
      "getProjects",
      "List all Backlog projects visible to the configured API key",
      schema(json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
      })),
    ),
    Tool::new(
      "searchIssues",
      "Search Backlog issues within a project",
      schema(json!({
        "type": "object",
        "properties": {
          "projectId": {
            "type": "number",
            "description": "Numeric project id"
          },
          "keyword": {
            "type": "string",
            "description": "Free-text search keyword"
          },
          "status": {
            "type": "array",
            "items": { "type": "string" },
            "description": "Status names to filter by (unstarted, in-progress, resolved, closed)"
          }
        },
        "required": ["projectId"]
      })),
    ),
    Tool::new(
      "getIssue",
      "Fetch a single Backlog issue",
      schema(json!({
        "type": "object",
        "properties": {
          "issueId": {
            "type": "string",
            "description": "Issue key (e.g. PROJ-1)"
          }
        },
        "required": ["issueId"]
      })),
    ),
    Tool::new(
      "updateIssue",
      "Update a Backlog issue's status or description, optionally with a comment",
      schema(json!({
        "type": "object",
        "properties": {
          "issueId": {
            "type": "string",
            "description": "Issue key (e.g. PROJ-1)"
          },
          "status": {
            "type": "string",
            "description": "New status name (unstarted, in-progress, resolved, closed)"
          },
          "description": {
            "type": "string",
            "description": "New issue description"
          },
          "comment": {
            "type": "string",
            "description": "Comment to post with the update"
          }
        },
        "required": ["issueId"]
      })),
    ),
  ]
}

fn schema(value: Value) -> Arc<JsonObject> {
  match value {
    Value::Object(map) => Arc::new(map),
    // All schemas above are object literals
    _ => Arc::new(JsonObject::new()),
  }
}
