//! Integration tests for the availability and booking endpoints, with the
//! upstream booking service mocked out.
//!
//! Run with `cargo test --features ssr`.
#![cfg(feature = "ssr")]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use slot_booking::api::{router, ApiState};
use slot_booking::data::schedule::DaySchedule;
use slot_booking::data::upstream::BackendClient;
use slot_booking::settings::Settings;

fn test_state(backend_url: &str) -> ApiState {
    let settings = Settings {
        backend_url: backend_url.to_string(),
        open_time: "10:00".to_string(),
        close_time: "17:30".to_string(),
        slot_minutes: 30,
    };

    ApiState {
        schedule: DaySchedule::from_settings(&settings).unwrap(),
        backend: BackendClient::new(backend_url),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_up() {
    let app = router(test_state("http://127.0.0.1:9"));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "UP" }));
}

#[tokio::test]
async fn available_slots_requires_date() {
    let app = router(test_state("http://127.0.0.1:9"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/available-slots")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Date parameter is required" })
    );
}

#[tokio::test]
async fn available_slots_rejects_malformed_date() {
    let app = router(test_state("http://127.0.0.1:9"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/available-slots?date=01-05-2024")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid date format. Use YYYY-MM-DD." })
    );
}

#[tokio::test]
async fn available_slots_merges_backend_booked_times() {
    let mut server = mockito::Server::new_async().await;
    let times_mock = server
        .mock("GET", "/times")
        .match_query(mockito::Matcher::UrlEncoded(
            "date".into(),
            "2024-05-01".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["10:30","17:30"]"#)
        .create_async()
        .await;

    let app = router(test_state(&server.url()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/available-slots?date=2024-05-01")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let slots = body.as_array().unwrap();

    // 10:00 through 17:30 inclusive, every half hour.
    assert_eq!(slots.len(), 16);
    assert_eq!(slots[0], json!({ "time": "10:00", "booked": false }));
    assert_eq!(slots[1], json!({ "time": "10:30", "booked": true }));
    assert_eq!(slots[15], json!({ "time": "17:30", "booked": true }));

    times_mock.assert_async().await;
}

#[tokio::test]
async fn available_slots_reports_backend_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/times")
        .with_status(500)
        .create_async()
        .await;

    let app = router(test_state(&server.url()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/available-slots?date=2024-05-01")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_json(response).await.get("error").is_some());
}

fn book_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/book")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn book_requires_time_name_and_phone() {
    // An unroutable backend: the handler must reject before any forwarding.
    let app = router(test_state("http://127.0.0.1:9"));

    let response = app
        .oneshot(book_request(json!({
            "date": "2024-05-01",
            "time": "",
            "name": "Jane",
            "phone_number": "555-1234",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Time slot, name, and phone number are required." })
    );
}

#[tokio::test]
async fn book_rejects_malformed_time() {
    let app = router(test_state("http://127.0.0.1:9"));

    let response = app
        .oneshot(book_request(json!({
            "date": "2024-05-01",
            "time": "9am",
            "name": "Jane",
            "phone_number": "555-1234",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid time format. Expected HH:MM." })
    );
}

#[tokio::test]
async fn book_forwards_reservation_and_success_body() {
    let mut server = mockito::Server::new_async().await;
    let book_mock = server
        .mock("POST", "/book")
        .match_body(mockito::Matcher::Json(json!({
            "time": "09:00",
            "name": "Jane",
            "phone_number": "555-1234",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Time slot booked successfully"}"#)
        .create_async()
        .await;

    let app = router(test_state(&server.url()));

    let response = app
        .oneshot(book_request(json!({
            "date": "2024-05-01",
            "time": "09:00",
            "name": "Jane",
            "phone_number": "555-1234",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Time slot booked successfully" })
    );

    book_mock.assert_async().await;
}

#[tokio::test]
async fn book_surfaces_application_error_in_ok_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/book")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"Time slot already booked"}"#)
        .create_async()
        .await;

    let app = router(test_state(&server.url()));

    let response = app
        .oneshot(book_request(json!({
            "date": "2024-05-01",
            "time": "10:30",
            "name": "Jane",
            "phone_number": "555-1234",
        })))
        .await
        .unwrap();

    // Rejected reservations ride a 2xx so the widget can show the message;
    // non-2xx is reserved for transport failures.
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Time slot already booked" })
    );
}

#[tokio::test]
async fn book_reports_unreachable_backend() {
    let app = router(test_state("http://127.0.0.1:9"));

    let response = app
        .oneshot(book_request(json!({
            "date": "2024-05-01",
            "time": "10:30",
            "name": "Jane",
            "phone_number": "555-1234",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_json(response).await.get("error").is_some());
}
