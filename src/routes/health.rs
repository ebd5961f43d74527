use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::trip_planning_service::TripPlanner;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(planner: web::Data<TripPlanner>) -> impl Responder {
    let mut health = HealthStatus {
        status: "OK".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let reference_result = check_reference_data(&planner);
    if reference_result.status != "ok" {
        health.status = "degraded".to_string();
    }
    health
        .services
        .insert("reference_data".to_string(), reference_result);

    HttpResponse::Ok().json(health)
}

fn check_reference_data(planner: &TripPlanner) -> ServiceStatus {
    let places = planner.reference_data().known_places();
    if places.is_empty() {
        log::error!("Reference data health check failed: no known places");
        return ServiceStatus {
            status: "error".to_string(),
            details: Some("No destinations available".to_string()),
        };
    }

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!("{} destinations loaded", places.len())),
    }
}
