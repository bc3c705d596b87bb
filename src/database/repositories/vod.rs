use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::VodReview, utils::sql};

#[derive(Clone)]
pub struct VodReviewRepository {
    pool: PgPool,
}

impl VodReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_reviews_for_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<VodReview>, sqlx::Error> {
        let reviews = sqlx::query_as::<_, VodReview>(&sql(r#"
                SELECT
                    id,
                    created_at,
                    notes
                FROM
                    vod_reviews
                WHERE
                    team_id = ?
                ORDER BY
                    created_at DESC
            "#))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }
}
