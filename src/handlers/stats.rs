use actix_web::{HttpResponse, Result, web};
use chrono::Utc;
use uuid::Uuid;

use crate::database::repositories::StatsRepository;
use crate::handlers::shared::ApiResponse;
use crate::services::stats;

/// Get the full dashboard snapshot for a team.
///
/// The reference time is taken once here and threaded through the whole
/// aggregation; nothing below this boundary reads the wall clock.
pub async fn get_team_stats(
    repo: web::Data<StatsRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let snapshot = stats::team_stats(repo.get_ref(), team_id, Utc::now())
        .await
        .map_err(|err| {
            log::error!("Failed to build stats snapshot for team {}: {}", team_id, err);
            err
        })?;

    Ok(ApiResponse::success(snapshot))
}
