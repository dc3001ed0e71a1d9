use serde::{Deserialize, Serialize};

/// Response of `GET /rest/api/2/serverinfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
  pub base_url: String,
  pub version: String,
  #[serde(default)]
  pub version_numbers: Vec<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deployment_type: Option<String>,
  pub build_number: u64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub build_date: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub database_build_number: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub server_time: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub scm_info: Option<String>,
  pub server_title: String,
}

impl ServerInfo {
  /// Whether the instance reports itself as Jira Cloud.
  pub fn is_cloud(&self) -> bool {
    self
      .deployment_type
      .as_deref()
      .is_some_and(|kind| kind.eq_ignore_ascii_case("cloud"))
  }
}
