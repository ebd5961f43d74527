use actix_web::{web, HttpResponse, Responder};

use crate::services::trip_planning_service::TripPlanner;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

/*
    /api/places
*/
pub async fn get_places(
    planner: web::Data<TripPlanner>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let prefix = params
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();

    let places: Vec<String> = planner
        .reference_data()
        .known_places()
        .into_iter()
        .filter(|place| place.to_lowercase().starts_with(&prefix))
        .take(params.limit.map(usize::from).unwrap_or(usize::MAX))
        .collect();

    HttpResponse::Ok().json(places)
}
