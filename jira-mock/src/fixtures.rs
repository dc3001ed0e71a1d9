//! Canned Jira responses served by the mock router.
//!
//! Each builder returns a fresh `serde_json::Value` so tests can also mount
//! them on their own `wiremock` mocks or tweak them before use.

use serde_json::Value;

fn parse(raw: &str) -> Value {
  serde_json::from_str(raw).expect("Failed to parse fixture JSON")
}

/// `GET /rest/api/2/serverinfo` of a Jira Server 8.20 instance.
pub fn server_info() -> Value {
  parse(include_str!("../fixtures/server_info.json"))
}

/// `GET /rest/api/2/myself`.
pub fn myself() -> Value {
  parse(include_str!("../fixtures/myself.json"))
}

/// `GET /rest/api/2/field`: three system and two custom fields.
pub fn all_fields() -> Value {
  parse(include_str!("../fixtures/all_fields.json"))
}

/// `GET /rest/api/2/project/{key}` for the `SD` sandbox project.
pub fn project_detail() -> Value {
  parse(include_str!("../fixtures/project_detail.json"))
}

/// `GET /rest/api/2/project`: `POC`, `APPSEC` and `SD`.
pub fn all_projects() -> Value {
  parse(include_str!("../fixtures/all_projects.json"))
}

/// A createmeta page of seven issue types.
pub fn project_issue_types() -> Value {
  parse(include_str!("../fixtures/project_issue_types.json"))
}

/// A createmeta page of the fields one issue type takes.
pub fn project_issue_fields() -> Value {
  parse(include_str!("../fixtures/project_issue_fields.json"))
}

/// `POST /rest/api/2/issue` success.
pub fn created_issue() -> Value {
  parse(include_str!("../fixtures/created_issue.json"))
}

/// `POST /rest/api/2/issue` rejected for a missing issue type.
pub fn create_issue_error() -> Value {
  parse(include_str!("../fixtures/create_issue_error.json"))
}

/// `GET /rest/api/2/search` rejected for malformed JQL.
pub fn search_error() -> Value {
  parse(include_str!("../fixtures/search_error.json"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_all_fixtures_parse() {
    let fixtures = [
      server_info(),
      myself(),
      all_fields(),
      project_detail(),
      all_projects(),
      project_issue_types(),
      project_issue_fields(),
      created_issue(),
      create_issue_error(),
      search_error(),
    ];
    assert!(fixtures.iter().all(|fixture| !fixture.is_null()));
  }

  #[test]
  fn test_page_fixtures_cover_their_totals() {
    let page = project_issue_types();
    assert_eq!(page["values"].as_array().unwrap().len() as u64, page["total"].as_u64().unwrap());

    // Recorded Jira payload: six values under a total of five.
    let page = project_issue_fields();
    assert_eq!(page["values"].as_array().unwrap().len(), 6);
    assert_eq!(page["total"].as_u64(), Some(5));
  }
}
