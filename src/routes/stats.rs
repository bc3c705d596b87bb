use actix_web::web;

use crate::handlers::stats;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/teams/{team_id}/stats",
        web::get().to(stats::get_team_stats),
    );
}
