use actix_web::web;

use crate::handlers::availability;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/teams/{team_id}/availability",
        web::get().to(availability::get_week_availability),
    )
    .route(
        "/teams/{team_id}/availability/{user_id}",
        web::put().to(availability::replace_week_availability),
    );
}
