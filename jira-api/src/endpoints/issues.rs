//! # Jira Issue Endpoints
//!
//! Issue creation and the create-metadata lookups that tell a caller which
//! issue types and fields a project accepts.

use tracing::{info, instrument};

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{
  CreateIssueRequest, CreatedIssue, GetProjectIssueFieldsRequest, GetProjectIssueTypesRequest, IssueType,
  IssueTypeField, Page,
};

impl JiraClient {
  /// List the issue types that can be created in a project
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project_issue_types(&self, request: &GetProjectIssueTypesRequest) -> Result<Page<IssueType>> {
    self
      .get_json(
        &["issue", "createmeta", request.project_id_or_key.as_str(), "issuetypes"],
        &request.query(),
      )
      .await
  }

  /// List the fields an issue type takes when created in a project
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project_issue_fields(
    &self,
    request: &GetProjectIssueFieldsRequest,
  ) -> Result<Page<IssueTypeField>> {
    self
      .get_json(
        &[
          "issue",
          "createmeta",
          request.project_id_or_key.as_str(),
          "issuetypes",
          request.issue_type_id.as_str(),
        ],
        &request.query(),
      )
      .await
  }

  /// Create an issue
  #[instrument(skip_all, level = "debug")]
  pub async fn create_issue(&self, request: &CreateIssueRequest) -> Result<CreatedIssue> {
    let created: CreatedIssue = self.post_json(&["issue"], request).await?;
    info!(key = %created.key, id = %created.id, "Created Jira issue");
    Ok(created)
  }
}

#[cfg(test)]
mod tests {
  use jira_mock::MockJiraServer;
  use reqwest::StatusCode;
  use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::models::{CreateIssueRequest, GetProjectIssueFieldsRequest, GetProjectIssueTypesRequest};

  #[tokio::test]
  async fn test_get_project_issue_types() -> anyhow::Result<()> {
    let server = MockJiraServer::start().await;
    let client = create_jira_client(&server.uri(), "test_user", "test_token")?;

    let request = GetProjectIssueTypesRequest::new("SAND").with_start_at(0).with_max_results(1);
    let page = client.get_project_issue_types(&request).await?;

    assert!(page.is_last);
    assert_eq!(page.total, 7);
    assert_eq!(page.values.len(), 7);
    assert_eq!(page.values[0].name, "Release");
    assert!(page.values.iter().all(|issue_type| !issue_type.subtask));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_issue_types_sends_paging() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/createmeta/SAND/issuetypes"))
      .and(query_param("startAt", "50"))
      .and(query_param("maxResults", "25"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "startAt": 50,
          "maxResults": 25,
          "total": 50,
          "isLast": true,
          "values": []
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let request = GetProjectIssueTypesRequest::new("SAND").with_start_at(50).with_max_results(25);
    let page = client.get_project_issue_types(&request).await?;
    assert_eq!(page.start_at, 50);
    assert!(page.values.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_issue_fields() -> anyhow::Result<()> {
    let server = MockJiraServer::start().await;
    let client = create_jira_client(&server.uri(), "test_user", "test_token")?;

    let request = GetProjectIssueFieldsRequest::new("SAND", "10002")
      .with_start_at(0)
      .with_max_results(1);
    let page = client.get_project_issue_fields(&request).await?;

    assert_eq!(page.total, 5);
    let required: Vec<_> = page
      .values
      .iter()
      .filter(|field| field.required)
      .map(|field| field.field_id.as_str())
      .collect();
    assert_eq!(required, vec!["issuetype", "summary", "MyValue"]);

    let my_value = page.values.iter().find(|field| field.field_id == "MyValue").unwrap();
    assert_eq!(my_value.schema.items.as_deref(), Some("myvalue"));
    assert_eq!(my_value.enabled_values().count(), 2);

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .and(basic_auth("test_user", "test_token"))
      .and(body_json(serde_json::json!({
          "fields": {
              "project": {"key": "SAND", "id": "10000"},
              "summary": "Test issue creation",
              "description": "This is a test issue created via API.",
              "issuetype": {"id": "10002"}
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(jira_mock::fixtures::created_issue()))
      .expect(1)
      .mount(&mock_server)
      .await;

    let request = CreateIssueRequest::from_dotted_fields([
      ("project.key", "SAND"),
      ("project.id", "10000"),
      ("summary", "Test issue creation"),
      ("description", "This is a test issue created via API."),
      ("issuetype.id", "10002"),
    ]);
    let created = client.create_issue(&request).await?;

    assert_eq!(created.id, "1252056");
    assert_eq!(created.key, "SD-123");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_missing_issue_type() -> anyhow::Result<()> {
    let server = MockJiraServer::start_with_error_responses().await;
    let client = create_jira_client(&server.uri(), "test_user", "test_token")?;

    let request = CreateIssueRequest::new().project_key("SAND").summary("No type");
    let err = client.create_issue(&request).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    let body = err.body().unwrap();
    assert!(body.error_messages.is_empty());
    assert_eq!(body.errors.get("issuetype").unwrap(), "issue type is required");

    Ok(())
  }
}
