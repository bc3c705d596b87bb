use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::CoachingSession, utils::sql};

#[derive(Clone)]
pub struct CoachingSessionRepository {
    pool: PgPool,
}

impl CoachingSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sessions joined to the team's events, newest first. Sessions whose
    /// result was never filled in are invisible to performance stats and
    /// are filtered here rather than downstream.
    pub async fn get_sessions_for_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<CoachingSession>, sqlx::Error> {
        let sessions = sqlx::query_as::<_, CoachingSession>(&sql(r#"
                SELECT
                    cs.id,
                    cs.result,
                    cs.created_at,
                    e.title AS event_title
                FROM
                    coaching_sessions cs
                    INNER JOIN events e ON cs.event_id = e.id
                WHERE
                    e.team_id = ?
                    AND cs.result IS NOT NULL
                ORDER BY
                    cs.created_at DESC
            "#))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}
