//! Constants for the Jira API client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Path segments of the REST API root every endpoint hangs off.
pub(crate) const API_ROOT: [&str; 3] = ["rest", "api", "2"];

/// Environment variable storing the Jira host.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Environment variable storing the API access token.
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Environment variable storing the account email paired with the token.
pub const ENV_JIRA_USER_EMAIL: &str = "JIRA_USER_EMAIL";

/// Environment variable storing the request timeout in whole seconds.
pub const ENV_JIRA_TIMEOUT_SECS: &str = "JIRA_TIMEOUT_SECS";
