use actix_web::web;

pub mod availability;
pub mod stats;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(stats::configure)
            .configure(availability::configure),
    );
}
