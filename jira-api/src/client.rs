use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::JiraApiOptions;
use crate::consts::USER_AGENT;
use crate::error::{JiraError, JiraErrorBody, Result};
use crate::models::JiraAuth;
use crate::url::{api_url, ensure_url_scheme};

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client.
  ///
  /// Fails when no user email accompanies the access token, when the token is
  /// empty, or when the URL cannot be parsed.
  pub fn new(options: JiraApiOptions) -> Result<Self> {
    let user_email = options
      .user_email
      .filter(|email| !email.trim().is_empty())
      .ok_or(JiraError::MissingUserEmail)?;
    if options.access_token.trim().is_empty() {
      return Err(JiraError::MissingAccessToken);
    }

    let base_url = ensure_url_scheme(&options.url)?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder().user_agent(USER_AGENT).default_headers(headers);
    if let Some(timeout) = options.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    debug!(%base_url, user = %user_email, "Created Jira client");

    Ok(Self {
      client,
      base_url,
      auth: JiraAuth {
        username: user_email,
        api_token: options.access_token,
      },
    })
  }

  /// The normalized base URL requests are sent to.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let url = api_url(&self.base_url, &["myself"])?;

    let response = self.authorized(self.client.get(url)).send().await?;

    Ok(response.status().is_success())
  }

  pub(crate) async fn get_json<T>(&self, segments: &[&str], query: &[(&str, String)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = api_url(&self.base_url, segments)?;
    debug!(%url, "GET");

    let mut request = self.client.get(url);
    if !query.is_empty() {
      request = request.query(query);
    }

    read_response(self.authorized(request).send().await?).await
  }

  pub(crate) async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let url = api_url(&self.base_url, segments)?;
    debug!(%url, "POST");

    let request = self.client.post(url).json(body);

    read_response(self.authorized(request).send().await?).await
  }

  fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
    request.basic_auth(&self.auth.username, Some(&self.auth.api_token))
  }
}

/// Map a response to the typed body on 2xx, or to [`JiraError::Api`] otherwise.
async fn read_response<T>(response: Response) -> Result<T>
where
  T: DeserializeOwned,
{
  let status = response.status();
  let text = response.text().await?;
  debug!(%status, bytes = text.len(), "Jira responded");

  if status.is_success() {
    return Ok(serde_json::from_str(&text)?);
  }

  let body = JiraErrorBody::from_response_text(&text);
  warn!(%status, error = %body, "Jira request failed");
  Err(JiraError::Api { status, body })
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  JiraClient::new(JiraApiOptions::new(base_url, api_token).with_user_email(username))
}
