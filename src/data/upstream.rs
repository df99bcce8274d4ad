use std::collections::HashSet;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::booking::BookingRequest;

/// Client for the upstream booking service that owns persistence and
/// double-booking enforcement.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Times already taken on a date. The upstream `/times` endpoint returns
    /// a bare JSON array of "HH:MM" strings.
    pub async fn booked_times(&self, date: &str) -> Result<HashSet<String>, reqwest::Error> {
        let times: Vec<String> = self
            .http
            .get(format!("{}/times", self.base_url))
            .query(&[("date", date)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(times.into_iter().collect())
    }

    /// Forwards a reservation. The upstream only understands time, name and
    /// phone number; the date stays with the widget tier. Returns the
    /// upstream status and body so the caller can translate application
    /// errors.
    pub async fn book(&self, request: &BookingRequest) -> Result<(StatusCode, Value), reqwest::Error> {
        let payload = json!({
            "time": request.time,
            "name": request.name,
            "phone_number": request.phone_number,
        });

        let response = self
            .http
            .post(format!("{}/book", self.base_url))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        Ok((status, body))
    }
}
