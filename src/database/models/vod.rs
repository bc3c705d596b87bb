use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VodReview {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl VodReview {
    /// A VOD counts as reviewed once someone has written actual notes.
    pub fn is_reviewed(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}
