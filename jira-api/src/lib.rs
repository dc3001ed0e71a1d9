//! # Jira API Client
//!
//! Typed access to a subset of the Jira REST API (v2): server info, the
//! current user, field metadata, projects, create metadata, and issue
//! creation.
//!
//! Each method sends one request. Successful responses are decoded into the
//! types in [`models`]; any other status comes back as [`JiraError::Api`] with
//! the status code and Jira's error body intact.

mod client;
pub mod config;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;
pub mod runtime;
pub mod url;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use config::JiraApiOptions;
pub use error::{JiraError, JiraErrorBody, Result};
// Re-export models
pub use models::{
  AllowedValue, AvatarUrls, CreateIssueRequest, CreatedIssue, Field, FieldSchema, GetProjectIssueFieldsRequest,
  GetProjectIssueTypesRequest, IssueType, IssueTypeField, JiraAuth, JiraUser, Page, Project, ProjectComponent,
  ProjectVersion, ServerInfo, SimpleListWrapper,
};
pub use runtime::{create_jira_runtime_and_client, create_jira_runtime_and_client_from_env};
