//! Server and identity endpoints.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{JiraUser, ServerInfo};

impl JiraClient {
  /// Get version and deployment details of the Jira instance
  #[instrument(skip(self), level = "debug")]
  pub async fn get_server_info(&self) -> Result<ServerInfo> {
    self.get_json(&["serverinfo"], &[]).await
  }

  /// Get the user the credentials belong to
  #[instrument(skip(self), level = "debug")]
  pub async fn get_myself(&self) -> Result<JiraUser> {
    self.get_json(&["myself"], &[]).await
  }
}
