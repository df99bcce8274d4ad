use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::json;

use crate::data::booking::BookingRequest;
use crate::data::schedule::DaySchedule;
use crate::data::upstream::BackendClient;

#[derive(Clone)]
pub struct ApiState {
    pub schedule: DaySchedule,
    pub backend: BackendClient,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/available-slots", get(available_slots))
        .route("/book", post(book))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "UP" }))
}

#[derive(Deserialize)]
struct SlotsQuery {
    date: Option<String>,
}

async fn available_slots(
    State(state): State<ApiState>,
    Query(query): Query<SlotsQuery>,
) -> Response {
    let Some(date) = query.date else {
        return error_response(StatusCode::BAD_REQUEST, "Date parameter is required");
    };

    if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        return error_response(StatusCode::BAD_REQUEST, "Invalid date format. Use YYYY-MM-DD.");
    }

    match state.backend.booked_times(&date).await {
        Ok(booked) => {
            let slots = state.schedule.availability(&booked);
            log::debug!("{} slots for {}, {} booked", slots.len(), date, booked.len());
            Json(slots).into_response()
        }
        Err(err) => {
            log::error!("failed to fetch booked times for {}: {}", date, err);
            error_response(StatusCode::BAD_GATEWAY, &err.to_string())
        }
    }
}

async fn book(State(state): State<ApiState>, Json(request): Json<BookingRequest>) -> Response {
    if request.time.is_empty() || request.name.is_empty() || request.phone_number.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Time slot, name, and phone number are required.",
        );
    }

    if NaiveTime::parse_from_str(&request.time, "%H:%M").is_err() {
        return error_response(StatusCode::BAD_REQUEST, "Invalid time format. Expected HH:MM.");
    }

    match state.backend.book(&request).await {
        Ok((status, body)) if status.is_success() => Json(body).into_response(),
        Ok((status, body)) => {
            // The widget reads application errors out of a 2xx body; a
            // rejected reservation is not a transport failure.
            match body.get("error").and_then(|e| e.as_str()) {
                Some(message) => {
                    log::debug!("booking rejected by backend ({}): {}", status, message);
                    Json(json!({ "error": message })).into_response()
                }
                None => {
                    log::error!("booking service returned status {} without an error body", status);
                    error_response(
                        StatusCode::BAD_GATEWAY,
                        &format!("booking service returned status {}", status),
                    )
                }
            }
        }
        Err(err) => {
            log::error!("failed to reach booking service: {}", err);
            error_response(StatusCode::BAD_GATEWAY, &err.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
