use actix_web::{web, App};

use trip_planner_api::{
    config::PlannerConfig, routes, services::trip_planning_service::TripPlanner,
};

pub struct TestApp {
    pub planner: web::Data<TripPlanner>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            planner: web::Data::new(TripPlanner::new(config)),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.planner.clone())
            .configure(routes::configure)
    }
}

#[allow(dead_code)]
pub fn trip_body(places: &[&str], mode: &str, start: &str, end: &str) -> serde_json::Value {
    serde_json::json!({
        "places": places,
        "transport_mode": mode,
        "hotel_preference": "Cheap",
        "food_preference": "Cheap",
        "start_date": start,
        "end_date": end,
    })
}
