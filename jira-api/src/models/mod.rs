//! # Jira Models
//!
//! Request and response shapes for the Jira REST endpoints the client covers.
//! Response types deserialize from Jira's camelCase JSON and ignore attributes
//! they do not model.

mod field;
mod issue;
mod meta;
mod project;
mod server;
mod user;

use serde::{Deserialize, Serialize};

pub use field::{Field, FieldSchema};
pub use issue::{CreateIssueRequest, CreatedIssue};
pub use meta::{AllowedValue, GetProjectIssueFieldsRequest, GetProjectIssueTypesRequest, IssueTypeField, Page};
pub use project::{IssueType, Project, ProjectComponent, ProjectVersion};
pub use server::ServerInfo;
pub use user::{JiraUser, SimpleListWrapper};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

impl std::fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraAuth")
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// Avatar image links keyed by pixel size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUrls {
  #[serde(rename = "16x16", skip_serializing_if = "Option::is_none")]
  pub x16: Option<String>,
  #[serde(rename = "24x24", skip_serializing_if = "Option::is_none")]
  pub x24: Option<String>,
  #[serde(rename = "32x32", skip_serializing_if = "Option::is_none")]
  pub x32: Option<String>,
  #[serde(rename = "48x48", skip_serializing_if = "Option::is_none")]
  pub x48: Option<String>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_jira_auth_debug_redacts_token() {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };

    let rendered = format!("{auth:?}");
    assert!(rendered.contains("test_user"));
    assert!(!rendered.contains("test_token"));
  }

  #[test]
  fn test_avatar_urls_partial() {
    let avatars: AvatarUrls = serde_json::from_value(json!({
        "48x48": "https://your_jira.com/avatar/48",
        "16x16": "https://your_jira.com/avatar/16"
    }))
    .unwrap();

    assert_eq!(avatars.x48.as_deref(), Some("https://your_jira.com/avatar/48"));
    assert_eq!(avatars.x16.as_deref(), Some("https://your_jira.com/avatar/16"));
    assert!(avatars.x24.is_none());
    assert_eq!(
      serde_json::to_value(&avatars).unwrap(),
      json!({
          "16x16": "https://your_jira.com/avatar/16",
          "48x48": "https://your_jira.com/avatar/48"
      })
    );
  }
}
