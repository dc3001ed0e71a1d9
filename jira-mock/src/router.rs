//! Path-pattern routing for the mock Jira server.
//!
//! Routes are tried in order and the first pattern matching the request path
//! wins, so the prefix patterns for `field`, `myself` and `serverinfo` shadow
//! anything longer below them. The HTTP method is not considered.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde_json::{Value, json};
use wiremock::{Request, Respond, ResponseTemplate};

use crate::fixtures;

/// The endpoint shapes the mock server recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JiraRoute {
  AllFields,
  Myself,
  ServerInfo,
  ProjectDetail,
  AllProjects,
  CreateIssue,
  ProjectIssueTypes,
  ProjectIssueFields,
  Search,
}

impl JiraRoute {
  /// The canned body this route answers with on success.
  pub fn fixture(self) -> Value {
    match self {
      JiraRoute::AllFields => fixtures::all_fields(),
      JiraRoute::Myself => fixtures::myself(),
      JiraRoute::ServerInfo => fixtures::server_info(),
      JiraRoute::ProjectDetail => fixtures::project_detail(),
      JiraRoute::AllProjects => fixtures::all_projects(),
      JiraRoute::CreateIssue => fixtures::created_issue(),
      JiraRoute::ProjectIssueTypes => fixtures::project_issue_types(),
      JiraRoute::ProjectIssueFields => fixtures::project_issue_fields(),
      JiraRoute::Search => fixtures::search_error(),
    }
  }
}

fn pattern(source: &str) -> Regex {
  RegexBuilder::new(source)
    .case_insensitive(true)
    .build()
    .expect("Failed to compile route pattern")
}

static ROUTES: LazyLock<Vec<(Regex, JiraRoute)>> = LazyLock::new(|| {
  vec![
    (pattern(r"^/rest/api/2/field"), JiraRoute::AllFields),
    (pattern(r"^/rest/api/2/myself"), JiraRoute::Myself),
    (pattern(r"^/rest/api/2/serverinfo"), JiraRoute::ServerInfo),
    (pattern(r"^/rest/api/2/project/\w+$"), JiraRoute::ProjectDetail),
    (pattern(r"^/rest/api/2/project$"), JiraRoute::AllProjects),
    (pattern(r"^/rest/api/2/issue$"), JiraRoute::CreateIssue),
    (
      pattern(r"^/rest/api/2/issue/createmeta/\w+/issuetypes$"),
      JiraRoute::ProjectIssueTypes,
    ),
    (
      pattern(r"^/rest/api/2/issue/createmeta/\w+/issuetypes/\w+$"),
      JiraRoute::ProjectIssueFields,
    ),
  ]
});

static ERROR_ROUTES: LazyLock<Vec<(Regex, JiraRoute)>> = LazyLock::new(|| {
  vec![
    (pattern(r"rest/api/2/myself"), JiraRoute::Myself),
    (pattern(r"rest/api/2/serverinfo"), JiraRoute::ServerInfo),
    (pattern(r"rest/api/2/search"), JiraRoute::Search),
    (pattern(r"rest/api/2/field"), JiraRoute::AllFields),
    (pattern(r"^/rest/api/2/issue$"), JiraRoute::CreateIssue),
  ]
});

fn first_match(routes: &[(Regex, JiraRoute)], path: &str) -> Option<JiraRoute> {
  routes
    .iter()
    .find(|(regex, _)| regex.is_match(path))
    .map(|(_, route)| *route)
}

/// Resolve a request path against the standard route table.
pub fn route(path: &str) -> Option<JiraRoute> {
  first_match(&ROUTES, path)
}

/// Resolve a request path against the error-scenario route table.
pub fn error_route(path: &str) -> Option<JiraRoute> {
  first_match(&ERROR_ROUTES, path)
}

/// How the router picks a response for a matched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterMode {
  /// Standard routes; every response carries the given status code.
  Status(u16),
  /// Error-scenario routes: identity and metadata succeed, JQL search and
  /// issue creation are rejected with 400.
  ErrorResponses,
}

/// A `wiremock` responder that dispatches on the request path.
#[derive(Debug, Clone, Copy)]
pub struct JiraRouter {
  mode: RouterMode,
}

impl JiraRouter {
  pub fn new(mode: RouterMode) -> Self {
    Self { mode }
  }

  pub fn with_status(status: u16) -> Self {
    Self::new(RouterMode::Status(status))
  }

  pub fn mode(&self) -> RouterMode {
    self.mode
  }

  /// The status and body served for `path`, or `None` when nothing matches.
  pub fn resolve(&self, path: &str) -> Option<(u16, Value)> {
    match self.mode {
      RouterMode::Status(status) => route(path).map(|matched| (status, matched.fixture())),
      RouterMode::ErrorResponses => error_route(path).map(|matched| match matched {
        JiraRoute::Search => (400, fixtures::search_error()),
        JiraRoute::CreateIssue => (400, fixtures::create_issue_error()),
        other => (200, other.fixture()),
      }),
    }
  }
}

impl Default for JiraRouter {
  fn default() -> Self {
    Self::with_status(200)
  }
}

impl Respond for JiraRouter {
  fn respond(&self, request: &Request) -> ResponseTemplate {
    let path = request.url.path();
    match self.resolve(path) {
      Some((status, body)) => ResponseTemplate::new(status).set_body_json(body),
      None => ResponseTemplate::new(404).set_body_json(no_mock_address(request)),
    }
  }
}

fn no_mock_address(request: &Request) -> Value {
  json!({
      "errorMessages": [format!("No mock address: {} {}", request.method, request.url.path())],
      "errors": {}
  })
}
