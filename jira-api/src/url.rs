//! URL helpers for Jira hosts and REST endpoint addresses.

use url::{Position, Url};

use crate::consts::API_ROOT;
use crate::error::{JiraError, Result};

/// Render a URL without the bare `/` path `Url` adds to host-only addresses.
fn normalize_url(url: &Url) -> String {
  let mut result = String::new();
  result.push_str(&url[..Position::BeforePath]);

  let path = url.path();
  if path != "/" {
    result.push_str(path);
  }

  if let Some(query) = url.query() {
    result.push('?');
    result.push_str(query);
  }

  if let Some(fragment) = url.fragment() {
    result.push('#');
    result.push_str(fragment);
  }

  result
}

fn invalid(input: &str, reason: impl Into<String>) -> JiraError {
  JiraError::InvalidUrl {
    url: input.to_string(),
    reason: reason.into(),
  }
}

/// Parse a URL by prefixing it with https:// scheme.
fn parse_with_https_prefix(input: &str) -> Result<Url> {
  let mut candidate = input;

  if let Some(colon_index) = input.find(':') {
    let potential_scheme = &input[..colon_index];
    if ["http", "https"]
      .iter()
      .any(|scheme| potential_scheme.eq_ignore_ascii_case(scheme))
    {
      let remainder = input[colon_index + 1..].trim_start_matches('/');
      if !remainder.is_empty() {
        candidate = remainder;
      }
    }
  }

  Url::parse(&format!("https://{candidate}")).map_err(|err| invalid(input, err.to_string()))
}

/// Ensure a Jira host has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. Also handles
/// malformed schemes like "http:/example.com" (missing slash).
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(invalid(input, "host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let partial_scheme = (lowered.starts_with("http:") && !lowered.starts_with("http://"))
    || (lowered.starts_with("https:") && !lowered.starts_with("https://"));
  if partial_scheme {
    let remainder = trimmed.split_once(':').map(|(_, rest)| rest).unwrap_or("");
    return parse_with_https_prefix(remainder.trim_start_matches('/')).map(|url| normalize_url(&url));
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if url.scheme().len() > 1 && url.host().is_some() => url,
    _ => parse_with_https_prefix(trimmed)?,
  };

  Ok(normalize_url(&url))
}

/// Build the address of a REST endpoint below `/rest/api/2`.
///
/// Each segment is percent-encoded on its own, so a project key containing `/`
/// or `?` stays inside its segment.
pub(crate) fn api_url(base_url: &str, segments: &[&str]) -> Result<Url> {
  let mut url = Url::parse(base_url).map_err(|err| invalid(base_url, err.to_string()))?;

  {
    let mut path = url
      .path_segments_mut()
      .map_err(|()| invalid(base_url, "URL cannot be a base"))?;
    path.pop_if_empty();
    path.extend(API_ROOT);
    path.extend(segments);
  }

  Ok(url)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ensure_url_scheme_with_https() {
    let result = ensure_url_scheme("https://company.atlassian.net").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_ensure_url_scheme_with_http() {
    let result = ensure_url_scheme("http://jira.example.com").unwrap();
    assert_eq!(result, "http://jira.example.com");
  }

  #[test]
  fn test_ensure_url_scheme_without_scheme() {
    let result = ensure_url_scheme("company.atlassian.net").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_ensure_url_scheme_trailing_slash() {
    let result = ensure_url_scheme("https://company.atlassian.net/").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_ensure_url_scheme_empty_string() {
    let result = ensure_url_scheme("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("host cannot be empty"));
  }

  #[test]
  fn test_ensure_url_scheme_with_port() {
    assert_eq!(ensure_url_scheme("localhost:8080").unwrap(), "https://localhost:8080");
    assert_eq!(
      ensure_url_scheme("http://127.0.0.1:8080").unwrap(),
      "http://127.0.0.1:8080"
    );
  }

  #[test]
  fn test_ensure_url_scheme_with_context_path() {
    let result = ensure_url_scheme("jira.example.com/jira").unwrap();
    assert_eq!(result, "https://jira.example.com/jira");
  }

  #[test]
  fn test_ensure_url_scheme_partial_scheme() {
    assert_eq!(ensure_url_scheme("http:/example.com").unwrap(), "https://example.com");
    assert_eq!(ensure_url_scheme("https:/example.com").unwrap(), "https://example.com");
  }

  #[test]
  fn test_ensure_url_scheme_case_sensitivity() {
    let result = ensure_url_scheme("HTTPS://Example.com").unwrap();
    assert_eq!(result, "https://example.com");
  }

  #[test]
  fn test_api_url_appends_segments() {
    let url = api_url("https://company.atlassian.net", &["project", "SD"]).unwrap();
    assert_eq!(url.as_str(), "https://company.atlassian.net/rest/api/2/project/SD");
  }

  #[test]
  fn test_api_url_keeps_context_path() {
    let url = api_url("https://jira.example.com/jira", &["serverinfo"]).unwrap();
    assert_eq!(url.as_str(), "https://jira.example.com/jira/rest/api/2/serverinfo");
  }

  #[test]
  fn test_api_url_encodes_segments() {
    let url = api_url("https://jira.example.com", &["project", "A/B?x"]).unwrap();
    assert_eq!(url.as_str(), "https://jira.example.com/rest/api/2/project/A%2FB%3Fx");
  }
}
