use serde::{Deserialize, Serialize};

/// One bookable time unit for a given date, as served by `/available-slots`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub time: String,
    pub booked: bool,
}

/// Payload submitted to `/book`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone_number: String,
}

impl BookingRequest {
    /// A booking must never leave the widget with any field empty.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty()
            && !self.time.is_empty()
            && !self.name.is_empty()
            && !self.phone_number.is_empty()
    }
}

/// Body of a `/book` response. Any payload without an `error` key is a
/// success; extra fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub error: Option<String>,
}
