use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AvatarUrls;

/// A Jira user as returned by `/myself` and embedded in other resources.
///
/// Jira Server identifies users by `key`/`name`, Jira Cloud by `accountId`, so
/// all identifiers are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<AvatarUrls>,
  pub display_name: String,
  #[serde(default)]
  pub active: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deleted: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_zone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub locale: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub groups: Option<SimpleListWrapper>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub application_roles: Option<SimpleListWrapper>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
}

impl JiraUser {
  /// The most specific identifier Jira gave for this user.
  pub fn identifier(&self) -> Option<&str> {
    self
      .account_id
      .as_deref()
      .or(self.key.as_deref())
      .or(self.name.as_deref())
  }
}

/// A collection Jira returns collapsed unless it is expanded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleListWrapper {
  pub size: u64,
  #[serde(default)]
  pub items: Vec<Value>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_server_user_deserialization() {
    let user: JiraUser = serde_json::from_value(json!({
        "self": "https://your_jira.com/rest/api/2/user?username=sharry.xu",
        "key": "sharry.xu",
        "name": "sharry.xu",
        "emailAddress": "sharry.xu@company.com",
        "avatarUrls": {
            "48x48": "https://your_jira.com/secure/useravatar?ownerId=sharry.xu&avatarId=17002"
        },
        "displayName": "Sharry Xu",
        "active": true,
        "deleted": false,
        "timeZone": "Asia/Shanghai",
        "locale": "en_US",
        "groups": {"size": 91, "items": []},
        "applicationRoles": {"size": 1, "items": []},
        "expand": "groups,applicationRoles"
    }))
    .unwrap();

    assert_eq!(user.display_name, "Sharry Xu");
    assert_eq!(user.identifier(), Some("sharry.xu"));
    assert_eq!(user.groups.unwrap().size, 91);
    assert_eq!(user.time_zone.as_deref(), Some("Asia/Shanghai"));
  }

  #[test]
  fn test_cloud_user_prefers_account_id() {
    let user: JiraUser = serde_json::from_value(json!({
        "accountId": "557058:c9b9c393-abd3-45a5-ac41-b3c2f5e2d96c",
        "displayName": "Good Know",
        "active": true
    }))
    .unwrap();

    assert_eq!(user.identifier(), Some("557058:c9b9c393-abd3-45a5-ac41-b3c2f5e2d96c"));
    assert!(user.email_address.is_none());
  }
}
