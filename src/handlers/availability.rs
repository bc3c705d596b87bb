use actix_web::{HttpResponse, Result, web};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{ReplaceAvailabilityRequest, WeekAvailability};
use crate::database::repositories::AvailabilityRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::week::WeekStart;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    /// Any date of the wanted week; defaults to today.
    pub date: Option<NaiveDate>,
}

impl AvailabilityQuery {
    fn week(&self) -> WeekStart {
        match self.date {
            Some(date) => WeekStart::for_date(date),
            None => WeekStart::for_datetime(Utc::now()),
        }
    }
}

pub async fn get_week_availability(
    repo: web::Data<AvailabilityRepository>,
    path: web::Path<Uuid>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    let week = query.week();

    let slots = repo
        .get_slots_for_week(team_id, week)
        .await
        .map_err(|err| {
            log::error!("Failed to load availability for team {}: {}", team_id, err);
            AppError::DataSource(err)
        })?;

    Ok(ApiResponse::success(WeekAvailability {
        week_start: week,
        slots,
    }))
}

/// Replace-all save of one player's week. Every slot is validated before
/// anything touches the store.
pub async fn replace_week_availability(
    repo: web::Data<AvailabilityRepository>,
    path: web::Path<(Uuid, Uuid)>,
    input: web::Json<ReplaceAvailabilityRequest>,
) -> Result<HttpResponse> {
    let (team_id, user_id) = path.into_inner();
    let week = WeekStart::for_date(input.date);

    for slot in &input.slots {
        slot.validate()?;
    }

    let slots = repo
        .replace_week(team_id, user_id, week, &input.slots)
        .await
        .map_err(|err| {
            log::error!(
                "Failed to replace availability for user {} of team {}: {}",
                user_id,
                team_id,
                err
            );
            AppError::DataSource(err)
        })?;

    Ok(ApiResponse::success(WeekAvailability {
        week_start: week,
        slots,
    }))
}
