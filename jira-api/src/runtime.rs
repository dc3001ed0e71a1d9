//! Helpers for synchronous callers.
//!
//! The client is async; code without its own runtime builds one here and
//! drives single calls with `block_on`.

use tokio::runtime::Runtime;

use crate::config::JiraApiOptions;
use crate::error::{JiraError, Result};
use crate::JiraClient;

/// Creates a tokio runtime and a Jira client.
pub fn create_jira_runtime_and_client(options: JiraApiOptions) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().map_err(|err| JiraError::InvalidConfig(format!("Failed to create async runtime: {err}")))?;
  let client = JiraClient::new(options)?;
  Ok((rt, client))
}

/// Creates a tokio runtime and a Jira client configured from the environment.
pub fn create_jira_runtime_and_client_from_env() -> Result<(Runtime, JiraClient)> {
  create_jira_runtime_and_client(JiraApiOptions::from_env()?)
}
