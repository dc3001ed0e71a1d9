//! # Command-Line Interface
//!
//! Derive-based argument definitions for the `jira` binary.

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use jira_api::JiraApiOptions;
use jira_api::consts::{ENV_JIRA_API_TOKEN, ENV_JIRA_HOST, ENV_JIRA_TIMEOUT_SECS, ENV_JIRA_USER_EMAIL};
use serde_json::Value;

/// Query and create Jira resources over the REST API
#[derive(Parser, Debug)]
#[command(name = "jira", version, about)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Print results as JSON instead of tables
  #[arg(long, global = true)]
  pub json: bool,

  #[command(flatten)]
  pub connection: ConnectionArgs,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// How to reach and authenticate against Jira
#[derive(Args, Debug)]
pub struct ConnectionArgs {
  /// Jira host or base URL (e.g. company.atlassian.net)
  #[arg(long, env = ENV_JIRA_HOST, global = true)]
  pub host: Option<String>,

  /// Account email paired with the API token
  #[arg(long, env = ENV_JIRA_USER_EMAIL, global = true)]
  pub email: Option<String>,

  /// API access token
  #[arg(long, env = ENV_JIRA_API_TOKEN, hide_env_values = true, global = true)]
  pub token: Option<String>,

  /// Request timeout in seconds
  #[arg(long, env = ENV_JIRA_TIMEOUT_SECS, global = true)]
  pub timeout: Option<u64>,
}

impl ConnectionArgs {
  pub fn to_options(&self) -> anyhow::Result<JiraApiOptions> {
    let host = self
      .host
      .clone()
      .ok_or_else(|| anyhow::anyhow!("No Jira host given. Pass --host or set {ENV_JIRA_HOST}."))?;
    let token = self
      .token
      .clone()
      .ok_or_else(|| anyhow::anyhow!("No API token given. Pass --token or set {ENV_JIRA_API_TOKEN}."))?;

    let mut options = JiraApiOptions::new(host, token);
    if let Some(email) = &self.email {
      options = options.with_user_email(email.clone());
    }
    if let Some(secs) = self.timeout {
      options = options.with_timeout(Duration::from_secs(secs));
    }
    Ok(options)
  }
}

/// Subcommands for the jira binary
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
  /// Show version and deployment details of the Jira instance
  ServerInfo,

  /// Show the user the credentials belong to
  Myself,

  /// List all system and custom fields
  Fields,

  /// List the projects visible to you
  Projects,

  /// Show a project's details and issue types
  Project {
    /// Project id or key (e.g. SD)
    project: String,
  },

  /// List the issue types that can be created in a project
  IssueTypes {
    /// Project id or key
    project: String,

    #[command(flatten)]
    paging: PagingArgs,
  },

  /// List the fields an issue type takes when created in a project
  IssueFields {
    /// Project id or key
    project: String,

    /// Issue type id (see `issue-types`)
    issue_type_id: String,

    #[command(flatten)]
    paging: PagingArgs,
  },

  /// Create an issue
  #[command(long_about = "Create an issue from dotted field assignments.\n\n\
                         Each --field takes PATH=VALUE. Dotted paths nest, so\n\
                         --field project.key=SD --field issuetype.id=10002 --field summary=Hello\n\
                         sends {\"project\": {\"key\": \"SD\"}, \"issuetype\": {\"id\": \"10002\"}, \"summary\": \"Hello\"}.\n\
                         Values that parse as JSON are sent as JSON, anything else as a string.")]
  CreateIssue {
    /// Field assignment as PATH=VALUE (repeatable)
    #[arg(long = "field", short = 'f', value_parser = parse_field_assignment, required = true)]
    fields: Vec<(String, Value)>,
  },
}

/// Paging parameters for the createmeta listings
#[derive(Args, Debug, Clone, Default)]
pub struct PagingArgs {
  /// Index of the first result to return
  #[arg(long)]
  pub start_at: Option<u32>,

  /// Maximum number of results to return
  #[arg(long)]
  pub max_results: Option<u32>,
}

/// Parse `PATH=VALUE`, reading VALUE as JSON when it is valid JSON.
pub fn parse_field_assignment(raw: &str) -> Result<(String, Value), String> {
  let (path, value) = raw
    .split_once('=')
    .ok_or_else(|| format!("expected PATH=VALUE, got '{raw}'"))?;

  let path = path.trim();
  if path.is_empty() || path.split('.').any(str::is_empty) {
    return Err(format!("invalid field path '{path}'"));
  }

  let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
  Ok((path.to_string(), value))
}
