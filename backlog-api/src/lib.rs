//! # Backlog API Client
//!
//! Provides Backlog REST API integration for the four operations the MCP
//! server exposes: listing projects, searching issues, fetching a single
//! issue, and partially updating an issue.

mod client;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::BacklogClient;
// Re-export the error type
pub use error::BacklogError;
// Re-export models
pub use models::{GetIssueArgs, Issue, IssueStatus, Project, SearchIssuesArgs, Status, UpdateIssueArgs, User};
