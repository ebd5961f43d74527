mod common;

use actix_web::test;
use serde_json::json;

use common::{trip_body, TestApp};

#[actix_rt::test]
async fn test_plan_trip_success() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(trip_body(
            &["Delhi", "Manali", "Leh"],
            "Rented Bike",
            "2025-09-01",
            "2025-09-05",
        ))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["duration_days"], 5);
    assert_eq!(body["is_peak_season"], false);
    // 5 days of (1800 + 500 + 495) plus 4 nights at 1000
    assert_eq!(body["total_budget"], 5 * (1800 + 500 + 495) + 4 * 1000);
    assert_eq!(body["best_route"], "Delhi -> Manali -> Leh");

    let itinerary = body["itinerary"].as_array().unwrap();
    let cards: Vec<&serde_json::Value> = itinerary
        .iter()
        .filter(|item| item["type"] == "day_card")
        .collect();
    assert_eq!(cards.len(), 4);
    for (index, card) in cards.iter().enumerate() {
        assert_eq!(card["day"], index as u64 + 1);
        assert_eq!(card["daily_cost"]["transport"], 1800);
        assert_eq!(card["daily_cost"]["total"], 1800 + 1000 + 500 + 495);
    }

    assert!(!body["rentals"].as_array().unwrap().is_empty());
    assert_eq!(body["map_points"].as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn test_plan_flexible_trip() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "places": ["Delhi", "Jaipur"],
            "transport_mode": "public_transport",
            "start_date": "2025-12-20",
            "flexible": true
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["duration_days"], 2);
    assert_eq!(body["is_peak_season"], true);
    assert!(body["rentals"].as_array().unwrap().is_empty());
    assert_eq!(body["itinerary"][0]["type"], "leg_header");
}

#[actix_rt::test]
async fn test_plan_with_one_place_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(trip_body(&["Goa"], "Rented Car", "2025-09-01", "2025-09-05"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INSUFFICIENT_PLACES");
}

#[actix_rt::test]
async fn test_plan_without_mode_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(trip_body(
            &["Goa", "Kochi"],
            "Select a mode",
            "2025-09-01",
            "2025-09-05",
        ))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "MISSING_TRANSPORT_MODE");
}

#[actix_rt::test]
async fn test_plan_with_inverted_dates_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(trip_body(
            &["Goa", "Kochi"],
            "Personal Car",
            "2025-09-05",
            "2025-09-01",
        ))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_DATE_RANGE");
}

#[actix_rt::test]
async fn test_plan_with_malformed_body() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "places": ["Goa", "Kochi"],
            "start_date": "not-a-date"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_flexible_plan_with_inverted_dates_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "places": ["Delhi", "Agra"],
            "transport_mode": "Personal Car",
            "start_date": "2025-09-05",
            "end_date": "2025-09-01",
            "flexible": true
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_DATE_RANGE");
}

#[actix_rt::test]
async fn test_tier_labels_ignore_case() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "places": ["Delhi", "Agra"],
            "transport_mode": "PERSONAL CAR",
            "hotel_preference": "CHEAP",
            "food_preference": "branded",
            "start_date": "2025-09-01",
            "end_date": "2025-09-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["daily_cost"]["stay"], 1000);
    assert_eq!(body["daily_cost"]["food"], 4000);
}

#[actix_rt::test]
async fn test_unknown_tier_label_means_standard() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "places": ["Delhi", "Agra"],
            "transport_mode": "Personal Car",
            "hotel_preference": "Palace",
            "start_date": "2025-09-01",
            "end_date": "2025-09-02"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["daily_cost"]["stay"], 2800);
    assert_eq!(body["daily_cost"]["food"], 1500);
}
