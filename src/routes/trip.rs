use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::ValidationError;
use crate::models::trip::TripSubmission;
use crate::services::{cost_service::CostService, trip_planning_service::TripPlanner};

#[derive(Deserialize)]
pub struct DailyCostQuery {
    mode: Option<String>,
    hotel: Option<String>,
    food: Option<String>,
}

/*
    /api/trips/plan
*/
pub async fn plan(
    planner: web::Data<TripPlanner>,
    input: web::Json<TripSubmission>,
) -> Result<HttpResponse, ValidationError> {
    log::debug!("Plan submission: {:?}", input);
    let request = input.into_inner().into_request();
    let plan = planner.plan_trip(&request, &mut rand::thread_rng())?;

    Ok(HttpResponse::Ok().json(plan))
}

/*
    /api/trips/daily-cost?mode=&hotel=&food=
*/
pub async fn daily_cost(
    planner: web::Data<TripPlanner>,
    params: web::Query<DailyCostQuery>,
) -> HttpResponse {
    let breakdown = CostService::daily_cost_from_labels(
        planner.reference_data(),
        params.mode.as_deref().unwrap_or_default(),
        params.hotel.as_deref().unwrap_or_default(),
        params.food.as_deref().unwrap_or_default(),
    );

    HttpResponse::Ok().json(breakdown)
}
