//! Field metadata endpoint.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::Field;

impl JiraClient {
  /// Get every system and custom field known to the instance
  #[instrument(skip(self), level = "debug")]
  pub async fn get_all_fields(&self) -> Result<Vec<Field>> {
    self.get_json(&["field"], &[]).await
  }
}
