use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::Feedback, utils::sql};

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_feedbacks_for_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let feedbacks = sqlx::query_as::<_, Feedback>(&sql(r#"
                SELECT
                    id,
                    status,
                    created_at
                FROM
                    feedbacks
                WHERE
                    team_id = ?
                ORDER BY
                    created_at DESC
            "#))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(feedbacks)
    }
}
