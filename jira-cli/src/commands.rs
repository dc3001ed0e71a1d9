//! Dispatch of parsed commands to the Jira client.

use std::io::Write;

use anyhow::{Context, Result};
use jira_api::{CreateIssueRequest, GetProjectIssueFieldsRequest, GetProjectIssueTypesRequest, JiraClient};
use tracing::info;

use crate::cli::{Commands, PagingArgs};
use crate::output;

/// Run one command and write its result to `out`.
pub async fn run<W: Write>(client: &JiraClient, command: &Commands, json: bool, out: &mut W) -> Result<()> {
  info!(?command, base_url = client.base_url(), "Running Jira command");

  match command {
    Commands::ServerInfo => {
      let info = client
        .get_server_info()
        .await
        .context("Failed to fetch Jira server info")?;
      if json {
        output::write_json(out, &info)
      } else {
        output::write_server_info(out, &info)
      }
    }
    Commands::Myself => {
      let user = client.get_myself().await.context("Failed to fetch current user")?;
      if json {
        output::write_json(out, &user)
      } else {
        output::write_user(out, &user)
      }
    }
    Commands::Fields => {
      let fields = client.get_all_fields().await.context("Failed to fetch Jira fields")?;
      if json {
        output::write_json(out, &fields)
      } else {
        output::write_fields(out, &fields)
      }
    }
    Commands::Projects => {
      let projects = client.get_all_projects().await.context("Failed to fetch projects")?;
      if json {
        output::write_json(out, &projects)
      } else {
        output::write_projects(out, &projects)
      }
    }
    Commands::Project { project } => {
      let detail = client
        .get_project_detail(project)
        .await
        .with_context(|| format!("Failed to fetch project {project}"))?;
      if json {
        output::write_json(out, &detail)
      } else {
        output::write_project(out, &detail)
      }
    }
    Commands::IssueTypes { project, paging } => {
      let request = apply_paging_to_types(GetProjectIssueTypesRequest::new(project.as_str()), paging);
      let page = client
        .get_project_issue_types(&request)
        .await
        .with_context(|| format!("Failed to fetch issue types for project {project}"))?;
      if json {
        output::write_json(out, &page)
      } else {
        output::write_issue_types(out, &page)
      }
    }
    Commands::IssueFields {
      project,
      issue_type_id,
      paging,
    } => {
      let request = apply_paging_to_fields(
        GetProjectIssueFieldsRequest::new(project.as_str(), issue_type_id.as_str()),
        paging,
      );
      let page = client
        .get_project_issue_fields(&request)
        .await
        .with_context(|| format!("Failed to fetch fields of issue type {issue_type_id} in project {project}"))?;
      if json {
        output::write_json(out, &page)
      } else {
        output::write_issue_fields(out, &page)
      }
    }
    Commands::CreateIssue { fields } => {
      let request = CreateIssueRequest::from_dotted_fields(fields.iter().map(|(path, value)| (path, value.clone())));
      let created = client.create_issue(&request).await.context("Failed to create issue")?;
      if json {
        output::write_json(out, &created)
      } else {
        output::write_created_issue(out, &created)
      }
    }
  }
}

fn apply_paging_to_types(mut request: GetProjectIssueTypesRequest, paging: &PagingArgs) -> GetProjectIssueTypesRequest {
  request.start_at = paging.start_at;
  request.max_results = paging.max_results;
  request
}

fn apply_paging_to_fields(
  mut request: GetProjectIssueFieldsRequest,
  paging: &PagingArgs,
) -> GetProjectIssueFieldsRequest {
  request.start_at = paging.start_at;
  request.max_results = paging.max_results;
  request
}
