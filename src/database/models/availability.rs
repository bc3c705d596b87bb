use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::services::week::WeekStart;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub user_id: Uuid,
    /// 0 = Sunday .. 6 = Saturday, matching the client's day picker.
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub week_start: WeekStart,
}

/// One slot of a replace-all-for-week save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlotInput {
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl AvailabilitySlotInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(0..=6).contains(&self.day_of_week) {
            return Err(AppError::InvalidInput(format!(
                "Day of week must be 0-6, got {}",
                self.day_of_week
            )));
        }
        if self.start_time >= self.end_time {
            return Err(AppError::InvalidInput(format!(
                "Slot must start before it ends ({} >= {})",
                self.start_time, self.end_time
            )));
        }
        Ok(())
    }
}

/// Body of a replace-all-for-week save. `date` may be any day of the target
/// week; the server normalizes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAvailabilityRequest {
    pub date: chrono::NaiveDate,
    pub slots: Vec<AvailabilitySlotInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekAvailability {
    pub week_start: WeekStart,
    pub slots: Vec<AvailabilitySlot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(day: i16, start: (u32, u32), end: (u32, u32)) -> AvailabilitySlotInput {
        AvailabilitySlotInput {
            day_of_week: day,
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn accepts_well_formed_slot() {
        assert!(input(2, (19, 0), (22, 0)).validate().is_ok());
    }

    #[test]
    fn rejects_inverted_times() {
        let err = input(2, (22, 0), (19, 0)).validate().unwrap_err();
        assert!(
            matches!(err, AppError::InvalidInput(_)),
            "expected invalid input, got {err:?}"
        );
    }

    #[test]
    fn rejects_zero_length_slot() {
        assert!(input(2, (19, 0), (19, 0)).validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_day() {
        assert!(input(7, (19, 0), (22, 0)).validate().is_err());
        assert!(input(-1, (19, 0), (22, 0)).validate().is_err());
    }
}
