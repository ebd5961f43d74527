use actix_web::web;

pub mod health;
pub mod location;
pub mod trip;

/// Mounts `/health` and the `/api` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/places", web::get().to(location::get_places))
                .service(
                    web::scope("/trips")
                        .route("/plan", web::post().to(trip::plan))
                        .route("/daily-cost", web::get().to(trip::daily_cost)),
                ),
        );
}
