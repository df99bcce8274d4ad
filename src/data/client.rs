use gloo_net::http::Request;
use gloo_net::Error;

use super::booking::{BookingRequest, BookingResponse, Slot};

/// Fetches the slot list for a date from the serving origin.
pub async fn fetch_available_slots(date: &str) -> Result<Vec<Slot>, Error> {
    let url = format!("/available-slots?date={}", urlencoding::encode(date));
    let response = Request::get(&url).send().await?;

    if !response.ok() {
        return Err(Error::GlooError(format!(
            "available-slots request failed with status {}",
            response.status()
        )));
    }

    response.json::<Vec<Slot>>().await
}

/// Submits a booking. A non-2xx status is a transport failure; application
/// errors arrive as a 2xx body with an `error` field.
pub async fn submit_booking(request: &BookingRequest) -> Result<BookingResponse, Error> {
    let response = Request::post("/book").json(request)?.send().await?;

    if !response.ok() {
        return Err(Error::GlooError(format!(
            "booking request failed with status {}",
            response.status()
        )));
    }

    response.json::<BookingResponse>().await
}
