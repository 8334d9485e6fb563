use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::BacklogError;

/// Represents a Backlog API client bound to a single space
pub struct BacklogClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) api_key: String,
}

impl BacklogClient {
  /// Create a new Backlog client.
  ///
  /// A trailing slash on the space URL is stripped; every call goes to
  /// `<spaceUrl>/api/v2` with the API key attached as a query credential.
  pub fn new(space_url: &str, api_key: &str) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: format!("{}/api/v2", space_url.trim_end_matches('/')),
      api_key: api_key.to_string(),
    }
  }

  /// Build a full URL for an API path like `/issues/PROJ-1`.
  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url)
  }

  /// Send a request and decode the response.
  ///
  /// This is the single normalization boundary for remote failures: every
  /// endpoint goes through here, and every transport error or non-success
  /// response comes out as [`BacklogError::Api`]. Nothing is retried.
  pub(crate) async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BacklogError> {
    let response = request
      .query(&[("apiKey", self.api_key.as_str())])
      .send()
      .await
      .map_err(|e| BacklogError::Api(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      return Err(BacklogError::Api(remote_message(response).await));
    }

    response.json::<T>().await.map_err(|e| BacklogError::Api(e.to_string()))
  }
}

/// Derive a human-readable message from an error response. Backlog error
/// payloads carry an optional `message` field; prefer it, and fall back to
/// the HTTP status when the body has no message to offer.
async fn remote_message(response: reqwest::Response) -> String {
  #[derive(Deserialize)]
  struct ErrorBody {
    message: Option<String>,
  }

  let status = response.status();
  match response.json::<ErrorBody>().await {
    Ok(ErrorBody { message: Some(message) }) => message,
    _ => format!("HTTP {status}"),
  }
}
