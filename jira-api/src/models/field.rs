use serde::{Deserialize, Serialize};

/// A system or custom field from `GET /rest/api/2/field`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub custom: bool,
  #[serde(default)]
  pub orderable: bool,
  #[serde(default)]
  pub navigable: bool,
  #[serde(default)]
  pub searchable: bool,
  #[serde(default)]
  pub clause_names: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<FieldSchema>,
}

/// Describes the value type a field holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
  #[serde(rename = "type")]
  pub field_type: String,
  /// Element type when `field_type` is `array`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub system: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_id: Option<u64>,
}
