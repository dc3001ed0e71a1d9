use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of `POST /rest/api/2/issue`.
///
/// Fields are addressed with dotted paths: `project.key` writes
/// `{"project": {"key": ...}}`, and siblings such as `project.id` merge into
/// the same object. Writing a path again replaces the earlier value; a nested
/// write over a scalar replaces the scalar with an object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIssueRequest {
  pub fields: Map<String, Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub update: Option<Map<String, Value>>,
}

impl CreateIssueRequest {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a request from `(dotted path, value)` pairs.
  pub fn from_dotted_fields<I, K, V>(fields: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
  {
    fields
      .into_iter()
      .fold(Self::new(), |request, (path, value)| request.field(path.as_ref(), value))
  }

  /// Set a field by dotted path.
  pub fn field(mut self, path: &str, value: impl Into<Value>) -> Self {
    insert_dotted(&mut self.fields, path, value.into());
    self
  }

  /// Set an `update` operation list for a field, e.g. `labels: [{"add": "x"}]`.
  pub fn update(mut self, field: &str, operations: impl Into<Value>) -> Self {
    self
      .update
      .get_or_insert_with(Map::new)
      .insert(field.to_string(), operations.into());
    self
  }

  pub fn project_key(self, key: &str) -> Self {
    self.field("project.key", key)
  }

  pub fn issue_type_id(self, id: &str) -> Self {
    self.field("issuetype.id", id)
  }

  pub fn summary(self, summary: &str) -> Self {
    self.field("summary", summary)
  }

  pub fn description(self, description: &str) -> Self {
    self.field("description", description)
  }
}

fn insert_dotted(target: &mut Map<String, Value>, path: &str, value: Value) {
  match path.split_once('.') {
    None => {
      target.insert(path.to_string(), value);
    }
    Some((head, rest)) => {
      let entry = target
        .entry(head.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
      if !entry.is_object() {
        *entry = Value::Object(Map::new());
      }
      if let Value::Object(nested) = entry {
        insert_dotted(nested, rest, value);
      }
    }
  }
}

/// Response of a successful issue creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
  pub id: String,
  pub key: String,
  #[serde(rename = "self")]
  pub self_url: String,
}
