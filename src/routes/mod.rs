use actix_web::web;

pub mod activity;
pub mod budget;
pub mod day_plan;
pub mod health;
pub mod trip;

/// Everything served under `/api`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/day-plans/options", web::post().to(day_plan::generate_options))
            .service(
                web::scope("/activities")
                    .route("/alternatives", web::post().to(activity::cheaper_alternatives))
                    .route("/replace", web::post().to(activity::replace)),
            )
            .route("/trips/days", web::post().to(trip::days))
            .route("/trips/days/accept", web::post().to(trip::accept))
            .route("/budget/summary", web::post().to(budget::summary)),
    );
}
