//! # Backlog Project Endpoints

use crate::client::BacklogClient;
use crate::error::BacklogError;
use crate::models::Project;

impl BacklogClient {
  /// List the projects visible to the configured API key.
  pub async fn get_projects(&self) -> Result<Vec<Project>, BacklogError> {
    let request = self.client.get(self.url("/projects"));
    self.execute(request).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::BacklogClient;

  #[tokio::test]
  async fn test_get_projects() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = BacklogClient::new(&mock_server.uri(), "test_key");

    Mock::given(method("GET"))
      .and(path("/api/v2/projects"))
      .and(query_param("apiKey", "test_key"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          {
              "id": 1,
              "projectKey": "PROJ",
              "name": "Project One"
          },
          {
              "id": 2,
              "projectKey": "OTHER",
              "name": "Project Two"
          }
      ])))
      .mount(&mock_server)
      .await;

    let projects = client.get_projects().await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].project_key, "PROJ");
    assert_eq!(projects[1].name, "Project Two");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_projects_unauthorized() {
    let mock_server = MockServer::start().await;
    let client = BacklogClient::new(&mock_server.uri(), "bad_key");

    Mock::given(method("GET"))
      .and(path("/api/v2/projects"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
          "message": "Authentication failure."
      })))
      .mount(&mock_server)
      .await;

    let err = client.get_projects().await.unwrap_err();
    assert!(err.to_string().contains("Authentication failure."));
  }
}
