use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::TeamMember, utils::sql};

#[derive(Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_team_members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, sqlx::Error> {
        let members = sqlx::query_as::<_, TeamMember>(&sql(r#"
                SELECT
                    user_id,
                    role,
                    display_name
                FROM
                    team_members
                WHERE
                    team_id = ?
                ORDER BY
                    display_name
            "#))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }
}
