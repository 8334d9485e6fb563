//! # Backlog Issue Endpoints
//!
//! Endpoint implementations for issue operations: searching within a
//! project, fetching a single issue, and partial updates.

use crate::client::BacklogClient;
use crate::error::BacklogError;
use crate::models::{GetIssueArgs, Issue, SearchIssuesArgs, Status, UpdateIssueArgs};

impl BacklogClient {
  /// Search issues within a project, optionally filtered by a keyword and
  /// a list of status names.
  ///
  /// Status names are translated to numeric ids before any network I/O; an
  /// unknown name fails the whole search with
  /// [`BacklogError::InvalidStatus`]. Result ordering is whatever the
  /// backend returns.
  pub async fn search_issues(&self, args: &SearchIssuesArgs) -> Result<Vec<Issue>, BacklogError> {
    let mut query: Vec<(&str, String)> = vec![("projectId[]", args.project_id.to_string())];

    if let Some(keyword) = &args.keyword {
      query.push(("keyword", keyword.clone()));
    }
    if let Some(statuses) = &args.status {
      for name in statuses {
        query.push(("statusId[]", Status::from_name(name)?.id().to_string()));
      }
    }

    let request = self.client.get(self.url("/issues")).query(&query);
    self.execute(request).await
  }

  /// Fetch a single issue by key (e.g. "PROJ-1").
  pub async fn get_issue(&self, args: &GetIssueArgs) -> Result<Issue, BacklogError> {
    let request = self.client.get(self.url(&format!("/issues/{}", args.issue_id)));
    self.execute(request).await
  }

  /// Partially update an issue.
  ///
  /// The outbound payload contains only the fields the caller supplied.
  /// An empty comment is not sent at all; an explicitly empty description
  /// is sent as-is, clearing the field remotely.
  pub async fn update_issue(&self, args: &UpdateIssueArgs) -> Result<Issue, BacklogError> {
    let mut payload = serde_json::Map::new();

    if let Some(status) = &args.status {
      payload.insert("statusId".to_string(), Status::from_name(status)?.id().into());
    }
    if let Some(comment) = args.comment.as_deref().filter(|c| !c.is_empty()) {
      payload.insert("comment".to_string(), comment.into());
    }
    if let Some(description) = &args.description {
      payload.insert("description".to_string(), description.clone().into());
    }

    let request = self
      .client
      .patch(self.url(&format!("/issues/{}", args.issue_id)))
      .json(&payload);
    self.execute(request).await
  }
}
