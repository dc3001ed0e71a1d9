//! A running mock Jira instance.

use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request};

use crate::router::{JiraRouter, RouterMode};

/// A `wiremock` server whose every request is answered by a [`JiraRouter`].
///
/// Point a client at [`uri`](Self::uri); the server shuts down when dropped.
pub struct MockJiraServer {
  server: MockServer,
  router: JiraRouter,
}

impl MockJiraServer {
  /// Start a server answering every known route with status 200.
  pub async fn start() -> Self {
    Self::start_with_router(JiraRouter::default()).await
  }

  /// Start a server that serves the usual fixtures under `status`.
  pub async fn start_with_status(status: u16) -> Self {
    Self::start_with_router(JiraRouter::with_status(status)).await
  }

  /// Start a server using the error-scenario routes.
  pub async fn start_with_error_responses() -> Self {
    Self::start_with_router(JiraRouter::new(RouterMode::ErrorResponses)).await
  }

  pub async fn start_with_router(router: JiraRouter) -> Self {
    let server = MockServer::start().await;

    Mock::given(any())
      .respond_with(router)
      .named("jira router")
      .mount(&server)
      .await;

    Self { server, router }
  }

  /// Base URL of the server, e.g. `http://127.0.0.1:PORT`.
  pub fn uri(&self) -> String {
    self.server.uri()
  }

  pub fn router(&self) -> JiraRouter {
    self.router
  }

  /// Requests received so far, oldest first.
  pub async fn received_requests(&self) -> Vec<Request> {
    self.server.received_requests().await.unwrap_or_default()
  }
}
