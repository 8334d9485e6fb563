//! Error types for the Backlog API client.

use thiserror::Error;

/// Errors produced by [`BacklogClient`](crate::BacklogClient) operations.
#[derive(Debug, Error)]
pub enum BacklogError {
  /// A status name outside the fixed Backlog enumeration was supplied.
  /// Raised before any network I/O happens.
  #[error("Invalid status: {0}")]
  InvalidStatus(String),

  /// The remote call failed, either at the transport level or with a
  /// non-success response. The message prefers the remote payload's
  /// `message` field and falls back to the transport error's description.
  #[error("Backlog API error: {0}")]
  Api(String),
}
