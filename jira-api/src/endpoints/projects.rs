//! Project endpoints.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::Project;

impl JiraClient {
  /// List the projects visible to the current user
  #[instrument(skip(self), level = "debug")]
  pub async fn get_all_projects(&self) -> Result<Vec<Project>> {
    self.get_json(&["project"], &[]).await
  }

  /// Get a project's details, including its issue types, by id or key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project_detail(&self, project_id_or_key: &str) -> Result<Project> {
    self.get_json(&["project", project_id_or_key], &[]).await
  }
}

#[cfg(test)]
mod tests {
  use jira_mock::MockJiraServer;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_get_all_projects() -> anyhow::Result<()> {
    let server = MockJiraServer::start().await;
    let client = create_jira_client(&server.uri(), "test_user", "test_token")?;

    let projects = client.get_all_projects().await?;
    let keys: Vec<_> = projects.iter().map(|project| project.key.as_str()).collect();
    assert_eq!(keys, vec!["POC", "APPSEC", "SD"]);
    assert!(projects.iter().all(|project| project.issue_types.is_empty()));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_detail() -> anyhow::Result<()> {
    let server = MockJiraServer::start().await;
    let client = create_jira_client(&server.uri(), "test_user", "test_token")?;

    let project = client.get_project_detail("SAND").await?;
    assert_eq!(project.key, "SD");
    assert_eq!(project.name, "Sandbox");
    assert_eq!(project.issue_types.len(), 4);
    assert_eq!(project.issue_type_named("Task").unwrap().id, "10002");
    assert_eq!(project.lead.as_ref().unwrap().display_name, "Good Know");

    let requests = server.received_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/rest/api/2/project/SAND");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_detail_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/NOPE"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
          "errorMessages": ["No project could be found with key 'NOPE'."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.get_project_detail("NOPE").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
      err.body().unwrap().error_messages,
      vec!["No project could be found with key 'NOPE'.".to_string()]
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_detail_encodes_key() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/A%2FB"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "1",
          "key": "AB",
          "name": "Slashed"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let project = client.get_project_detail("A/B").await?;
    assert_eq!(project.name, "Slashed");

    Ok(())
  }
}
