use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{
    models::{AvailabilitySlot, AvailabilitySlotInput},
    utils::sql,
};
use crate::services::week::WeekStart;

#[derive(Clone)]
pub struct AvailabilityRepository {
    pool: PgPool,
}

impl AvailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_slots_for_week(
        &self,
        team_id: Uuid,
        week: WeekStart,
    ) -> Result<Vec<AvailabilitySlot>, sqlx::Error> {
        let slots = sqlx::query_as::<_, AvailabilitySlot>(&sql(r#"
                SELECT
                    user_id,
                    day_of_week,
                    start_time,
                    end_time,
                    week_start
                FROM
                    availability_slots
                WHERE
                    team_id = ?
                    AND week_start = ?
                ORDER BY
                    day_of_week,
                    start_time
            "#))
        .bind(team_id)
        .bind(week)
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }

    /// Replaces everything the player had on file for the week. Delete and
    /// re-insert run in one transaction so concurrent readers never observe
    /// the player with zero slots.
    pub async fn replace_week(
        &self,
        team_id: Uuid,
        user_id: Uuid,
        week: WeekStart,
        slots: &[AvailabilitySlotInput],
    ) -> Result<Vec<AvailabilitySlot>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(&sql(r#"
                DELETE FROM availability_slots
                WHERE
                    team_id = ?
                    AND user_id = ?
                    AND week_start = ?
            "#))
        .bind(team_id)
        .bind(user_id)
        .bind(week)
        .execute(&mut *tx)
        .await?;

        let mut inserted = Vec::with_capacity(slots.len());
        for slot in slots {
            let row = sqlx::query_as::<_, AvailabilitySlot>(&sql(r#"
                    INSERT INTO
                        availability_slots (
                            team_id,
                            user_id,
                            week_start,
                            day_of_week,
                            start_time,
                            end_time
                        )
                    VALUES
                        (?, ?, ?, ?, ?, ?)
                    RETURNING
                        user_id,
                        day_of_week,
                        start_time,
                        end_time,
                        week_start
                "#))
            .bind(team_id)
            .bind(user_id)
            .bind(week)
            .bind(slot.day_of_week)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .fetch_one(&mut *tx)
            .await?;
            inserted.push(row);
        }

        tx.commit().await?;

        Ok(inserted)
    }
}
