use serde::{Deserialize, Serialize};

use super::{AvatarUrls, JiraUser};

/// A Jira project.
///
/// `GET /rest/api/2/project` returns the summary attributes only; the detail
/// endpoint fills in the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub key: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lead: Option<JiraUser>,
  #[serde(default)]
  pub components: Vec<ProjectComponent>,
  #[serde(default)]
  pub issue_types: Vec<IssueType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<String>,
  #[serde(default)]
  pub versions: Vec<ProjectVersion>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<AvatarUrls>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_type_key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub simplified: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub style: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_private: Option<bool>,
}

impl Project {
  /// Look up one of the project's issue types by name, ignoring case.
  pub fn issue_type_named(&self, name: &str) -> Option<&IssueType> {
    self
      .issue_types
      .iter()
      .find(|issue_type| issue_type.name.eq_ignore_ascii_case(name))
  }
}

/// An issue type, either embedded in a project or listed by createmeta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
  pub name: String,
  #[serde(default)]
  pub subtask: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_id: Option<u64>,
  /// -1 for sub-tasks, 0 for standard types, higher for epics and above.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hierarchy_level: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectComponent {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectVersion {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub archived: bool,
  #[serde(default)]
  pub released: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub release_date: Option<String>,
}
