//! Error types for the Jira client.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors produced while configuring the client or talking to Jira.
#[derive(Error, Debug)]
pub enum JiraError {
  #[error("User email must be provided when authenticating with an access token")]
  MissingUserEmail,

  #[error("Access token must not be empty")]
  MissingAccessToken,

  #[error("Invalid Jira URL '{url}': {reason}")]
  InvalidUrl { url: String, reason: String },

  #[error("Jira environment variable '{0}' not set")]
  MissingEnv(&'static str),

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("Failed to decode Jira response: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("Jira API error: HTTP {status} - {body}")]
  Api { status: StatusCode, body: JiraErrorBody },
}

impl JiraError {
  /// The HTTP status Jira answered with, when the error came from a response.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      JiraError::Api { status, .. } => Some(*status),
      JiraError::Http(err) => err.status(),
      _ => None,
    }
  }

  /// The Jira error body, when the error came from a response.
  pub fn body(&self) -> Option<&JiraErrorBody> {
    match self {
      JiraError::Api { body, .. } => Some(body),
      _ => None,
    }
  }

  pub fn is_auth_failure(&self) -> bool {
    matches!(self.status(), Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN))
  }

  pub fn is_not_found(&self) -> bool {
    self.status() == Some(StatusCode::NOT_FOUND)
  }
}

/// The error payload Jira returns alongside non-success statuses.
///
/// `errorMessages` carries request-level problems and `errors` maps field ids
/// to field-level problems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraErrorBody {
  #[serde(default)]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: BTreeMap<String, String>,
}

impl JiraErrorBody {
  /// Build an error body from raw response text.
  ///
  /// Jira-shaped JSON, an object carrying `errorMessages` or `errors`, is
  /// parsed as such. Anything else non-empty becomes the single entry of
  /// `error_messages`.
  pub fn from_response_text(text: &str) -> Self {
    let trimmed = text.trim();
    if trimmed.is_empty() {
      return Self::default();
    }

    serde_json::from_str::<Value>(trimmed)
      .ok()
      .filter(|value| value.get("errorMessages").is_some() || value.get("errors").is_some())
      .and_then(|value| serde_json::from_value(value).ok())
      .unwrap_or_else(|| Self {
        error_messages: vec![trimmed.to_string()],
        errors: BTreeMap::new(),
      })
  }

  pub fn is_empty(&self) -> bool {
    self.error_messages.is_empty() && self.errors.is_empty()
  }

  /// All messages joined into a single line, field errors as `field: message`.
  pub fn summary(&self) -> String {
    self
      .error_messages
      .iter()
      .cloned()
      .chain(self.errors.iter().map(|(field, message)| format!("{field}: {message}")))
      .collect::<Vec<_>>()
      .join("; ")
  }
}

impl fmt::Display for JiraErrorBody {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_empty() {
      f.write_str("no error details")
    } else {
      f.write_str(&self.summary())
    }
  }
}

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, JiraError>;
