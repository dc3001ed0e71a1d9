//! Create-metadata shapes: which issue types a project accepts and which
//! fields each of them takes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FieldSchema;

/// A page of results from the paged createmeta endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  #[serde(default)]
  pub start_at: u64,
  #[serde(default)]
  pub max_results: u64,
  #[serde(default)]
  pub total: u64,
  #[serde(default)]
  pub is_last: bool,
  #[serde(default = "Vec::new")]
  pub values: Vec<T>,
}

/// A field an issue type accepts at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeField {
  pub field_id: String,
  pub name: String,
  #[serde(default)]
  pub required: bool,
  pub schema: FieldSchema,
  #[serde(default)]
  pub has_default_value: bool,
  #[serde(default)]
  pub operations: Vec<String>,
  #[serde(default)]
  pub allowed_values: Vec<AllowedValue>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default_value: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub auto_complete_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
}

impl IssueTypeField {
  /// Allowed values a user can still pick.
  pub fn enabled_values(&self) -> impl Iterator<Item = &AllowedValue> {
    self.allowed_values.iter().filter(|value| !value.disabled)
  }
}

/// One entry of `allowedValues`.
///
/// Jira mixes option shapes here (`value` for select options, `name` for issue
/// types, priorities and the like), so every attribute is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowedValue {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub disabled: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subtask: Option<bool>,
}

impl AllowedValue {
  /// The human-facing label: `value` for options, `name` otherwise.
  pub fn label(&self) -> Option<&str> {
    self.value.as_deref().or(self.name.as_deref())
  }
}

/// Parameters for listing the issue types a project accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProjectIssueTypesRequest {
  pub project_id_or_key: String,
  pub start_at: Option<u32>,
  pub max_results: Option<u32>,
}

impl GetProjectIssueTypesRequest {
  pub fn new(project_id_or_key: impl Into<String>) -> Self {
    Self {
      project_id_or_key: project_id_or_key.into(),
      start_at: None,
      max_results: None,
    }
  }

  pub fn with_start_at(mut self, start_at: u32) -> Self {
    self.start_at = Some(start_at);
    self
  }

  pub fn with_max_results(mut self, max_results: u32) -> Self {
    self.max_results = Some(max_results);
    self
  }

  pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
    paging_query(self.start_at, self.max_results)
  }
}

/// Parameters for listing the fields an issue type accepts in a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProjectIssueFieldsRequest {
  pub project_id_or_key: String,
  pub issue_type_id: String,
  pub start_at: Option<u32>,
  pub max_results: Option<u32>,
}

impl GetProjectIssueFieldsRequest {
  pub fn new(project_id_or_key: impl Into<String>, issue_type_id: impl Into<String>) -> Self {
    Self {
      project_id_or_key: project_id_or_key.into(),
      issue_type_id: issue_type_id.into(),
      start_at: None,
      max_results: None,
    }
  }

  pub fn with_start_at(mut self, start_at: u32) -> Self {
    self.start_at = Some(start_at);
    self
  }

  pub fn with_max_results(mut self, max_results: u32) -> Self {
    self.max_results = Some(max_results);
    self
  }

  pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
    paging_query(self.start_at, self.max_results)
  }
}

fn paging_query(start_at: Option<u32>, max_results: Option<u32>) -> Vec<(&'static str, String)> {
  let mut query = Vec::new();
  if let Some(start_at) = start_at {
    query.push(("startAt", start_at.to_string()));
  }
  if let Some(max_results) = max_results {
    query.push(("maxResults", max_results.to_string()));
  }
  query
}
