use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One coaching/analysis session tied to a completed event. `result` is
/// whatever the coach typed in; classification happens at read time and is
/// never stored back.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CoachingSession {
    pub id: Uuid,
    pub result: Option<String>,
    pub created_at: DateTime<Utc>,
    pub event_title: String,
}
