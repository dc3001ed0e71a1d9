//! Connection settings for [`JiraClient`](crate::JiraClient).

use std::time::Duration;

use crate::consts::{ENV_JIRA_API_TOKEN, ENV_JIRA_HOST, ENV_JIRA_TIMEOUT_SECS, ENV_JIRA_USER_EMAIL};
use crate::error::{JiraError, Result};

/// Where and how to reach a Jira instance.
#[derive(Clone)]
pub struct JiraApiOptions {
  /// Host or base URL, with or without scheme.
  pub url: String,
  pub access_token: String,
  /// Account email sent with the token as HTTP Basic credentials.
  pub user_email: Option<String>,
  pub timeout: Option<Duration>,
}

impl std::fmt::Debug for JiraApiOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraApiOptions")
      .field("url", &self.url)
      .field("access_token", &"<redacted>")
      .field("user_email", &self.user_email)
      .field("timeout", &self.timeout)
      .finish()
  }
}

impl JiraApiOptions {
  pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      access_token: access_token.into(),
      user_email: None,
      timeout: None,
    }
  }

  pub fn with_user_email(mut self, user_email: impl Into<String>) -> Self {
    self.user_email = Some(user_email.into());
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Read options from `JIRA_HOST`, `JIRA_API_TOKEN`, `JIRA_USER_EMAIL` and
  /// `JIRA_TIMEOUT_SECS`.
  pub fn from_env() -> Result<Self> {
    let url = required_env(ENV_JIRA_HOST)?;
    let access_token = required_env(ENV_JIRA_API_TOKEN)?;

    let mut options = Self::new(url, access_token);
    options.user_email = optional_env(ENV_JIRA_USER_EMAIL);

    if let Some(raw) = optional_env(ENV_JIRA_TIMEOUT_SECS) {
      let secs = raw.trim().parse::<u64>().map_err(|err| {
        JiraError::InvalidConfig(format!("{ENV_JIRA_TIMEOUT_SECS}='{raw}' is not a whole number of seconds: {err}"))
      })?;
      options.timeout = Some(Duration::from_secs(secs));
    }

    Ok(options)
  }
}

fn optional_env(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required_env(name: &'static str) -> Result<String> {
  optional_env(name).ok_or(JiraError::MissingEnv(name))
}
