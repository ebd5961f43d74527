use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_planner_api::{
    config::PlannerConfig, routes, services::trip_planning_service::TripPlanner,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    let config = PlannerConfig::from_env();
    let (host, port) = (config.host.clone(), config.port);
    log::info!(
        "Peak season months {:?}, surcharge {}%",
        config.peak_season.months,
        config.peak_surcharge_percent
    );

    let planner = web::Data::new(TripPlanner::new(config));

    println!("Attempting to bind to {}:{}", host, port);
    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(planner.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
