//! Trip booking CRUD and history aggregation over HTTP.

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use uuid::Uuid;
use wander_hub_server::models::BookingStatus;
use wander_hub_server::server::http::configure_routes;
use wander_hub_server::AppState;

async fn register(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    email: &str,
) -> (Uuid, String) {
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Traveler",
            "email": email,
            "password": "wanderlust"
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let id = body["user"]["id"].as_str().unwrap().parse().unwrap();
    let token = body["token"].as_str().unwrap().to_string();
    (id, token)
}

async fn seed_completed_trips(state: &Arc<AppState>, user_id: Uuid) {
    for booking in [
        common::trip_booking(user_id, "Vizag", Some(3000.0), BookingStatus::Completed, Some(4)),
        common::trip_booking(user_id, "Vizag", Some(2000.0), BookingStatus::Completed, Some(5)),
        common::trip_booking(user_id, "Araku", Some(3000.0), BookingStatus::Completed, None),
    ] {
        state.storage.create_trip_booking(&booking).await.unwrap();
    }
}

#[actix_rt::test]
async fn booking_is_created_pending_and_listed() {
    let state = common::app_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;
    let (_, token) = register(&app, "booker@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/trip-bookings")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "tripDetails": {
                "destination": "Goa",
                "startDate": "2025-04-01",
                "endDate": "2025-04-05",
                "travelers": 2
            },
            "paymentDetails": { "totalAmount": 5000.0 }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["tripDetails"]["destination"], "Goa");

    let req = test::TestRequest::get()
        .uri("/api/trip-bookings")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["bookings"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn status_filter_narrows_the_listing() {
    let state = common::app_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;
    let (user_id, token) = register(&app, "filter@example.com").await;

    seed_completed_trips(&state, user_id).await;
    let pending = common::trip_booking(user_id, "Goa", None, BookingStatus::Pending, None);
    state.storage.create_trip_booking(&pending).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/trip-bookings?status=completed")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["bookings"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/trip-bookings?status=archived")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn history_reports_completed_trips_and_stats() {
    let state = common::app_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;
    let (user_id, token) = register(&app, "history@example.com").await;

    seed_completed_trips(&state, user_id).await;
    let pending = common::trip_booking(user_id, "Goa", Some(9999.0), BookingStatus::Pending, None);
    state.storage.create_trip_booking(&pending).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/trip-bookings/history")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["bookings"].as_array().unwrap().len(), 3);

    let stats = &body["data"]["stats"];
    assert_eq!(stats["totalTrips"], 3);
    assert_eq!(stats["totalSpent"], 8000.0);
    assert_eq!(stats["placesVisited"], 2);
    assert_eq!(stats["avgRating"], 4.5);
}

#[actix_rt::test]
async fn history_of_a_new_traveler_is_all_zeros() {
    let state = common::app_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;
    let (_, token) = register(&app, "fresh@example.com").await;

    let req = test::TestRequest::get()
        .uri("/api/trip-bookings/history")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["bookings"].as_array().unwrap().is_empty());
    assert_eq!(
        body["data"]["stats"],
        json!({
            "totalTrips": 0,
            "totalSpent": 0.0,
            "placesVisited": 0,
            "avgRating": 0.0
        })
    );
}

#[actix_rt::test]
async fn foreign_booking_reads_back_as_not_found() {
    let state = common::app_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;
    let (owner_id, _) = register(&app, "owner@example.com").await;
    let (_, intruder_token) = register(&app, "intruder@example.com").await;

    let booking = common::trip_booking(owner_id, "Vizag", Some(3000.0), BookingStatus::Completed, None);
    state.storage.create_trip_booking(&booking).await.unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/trip-bookings/{}", booking.id))
        .insert_header(("Authorization", format!("Bearer {}", intruder_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The other traveler's listing never includes it either
    let req = test::TestRequest::get()
        .uri("/api/trip-bookings")
        .insert_header(("Authorization", format!("Bearer {}", intruder_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["bookings"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn feedback_is_restricted_to_completed_trips() {
    let state = common::app_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;
    let (user_id, token) = register(&app, "reviewer@example.com").await;

    let completed = common::trip_booking(user_id, "Araku", Some(3000.0), BookingStatus::Completed, None);
    let pending = common::trip_booking(user_id, "Goa", None, BookingStatus::Pending, None);
    state.storage.create_trip_booking(&completed).await.unwrap();
    state.storage.create_trip_booking(&pending).await.unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/trip-bookings/{}/feedback", completed.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "rating": 4, "comment": "Great hills" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["feedback"]["rating"], 4);

    let req = test::TestRequest::put()
        .uri(&format!("/api/trip-bookings/{}/feedback", pending.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "rating": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/trip-bookings/{}/feedback", completed.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "rating": 6 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
