use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::Event, utils::sql};

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_events_for_team(&self, team_id: Uuid) -> Result<Vec<Event>, sqlx::Error> {
        let events = sqlx::query_as::<_, Event>(&sql(r#"
                SELECT
                    id,
                    event_type,
                    title,
                    date_start,
                    date_end
                FROM
                    events
                WHERE
                    team_id = ?
                ORDER BY
                    date_start
            "#))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
