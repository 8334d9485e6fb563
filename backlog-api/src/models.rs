use serde::{Deserialize, Serialize};

use crate::error::BacklogError;

/// The four fixed Backlog workflow states.
///
/// The name-to-id mapping is closed and total; names outside this set are
/// rejected with [`BacklogError::InvalidStatus`] rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  Unstarted,
  InProgress,
  Resolved,
  Closed,
}

impl Status {
  /// Parse a status name as accepted in tool arguments.
  pub fn from_name(name: &str) -> Result<Self, BacklogError> {
    match name {
      "unstarted" => Ok(Self::Unstarted),
      "in-progress" => Ok(Self::InProgress),
      "resolved" => Ok(Self::Resolved),
      "closed" => Ok(Self::Closed),
      other => Err(BacklogError::InvalidStatus(other.to_string())),
    }
  }

  /// The numeric id Backlog expects in `statusId` filters and updates.
  pub const fn id(self) -> u32 {
    match self {
      Self::Unstarted => 1,
      Self::InProgress => 2,
      Self::Resolved => 3,
      Self::Closed => 4,
    }
  }
}

/// Represents a Backlog issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
  pub id: u64,
  pub issue_key: String,
  pub summary: String,
  pub description: String,
  pub status: IssueStatus,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<User>,
  pub created_user: User,
  pub created: String,
  pub updated: String,
}

/// Represents an issue's workflow status as reported by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueStatus {
  pub id: u32,
  pub name: String,
}

/// Represents a Backlog user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id: u64,
  pub name: String,
}

/// Represents a Backlog project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id: u64,
  pub project_key: String,
  pub name: String,
}

/// Arguments for [`BacklogClient::search_issues`](crate::BacklogClient::search_issues)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchIssuesArgs {
  #[serde(rename = "projectId")]
  pub project_id: u64,
  pub keyword: Option<String>,
  /// Status names, translated to ids before transmission.
  pub status: Option<Vec<String>>,
}

/// Arguments for [`BacklogClient::get_issue`](crate::BacklogClient::get_issue)
#[derive(Debug, Clone, Deserialize)]
pub struct GetIssueArgs {
  #[serde(rename = "issueId")]
  pub issue_id: String,
}

/// Arguments for [`BacklogClient::update_issue`](crate::BacklogClient::update_issue)
///
/// Only the fields actually supplied end up in the outbound payload; absent
/// fields must not overwrite remote state.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateIssueArgs {
  #[serde(rename = "issueId")]
  pub issue_id: String,
  pub status: Option<String>,
  pub description: Option<String>,
  pub comment: Option<String>,
}
