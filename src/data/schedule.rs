use std::collections::HashSet;

use chrono::{Duration, NaiveTime};

use super::booking::Slot;
use crate::settings::Settings;

/// The bookable day grid: every `step` from `open` to `close`, inclusive.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    open: NaiveTime,
    close: NaiveTime,
    step: Duration,
}

impl DaySchedule {
    pub fn from_settings(settings: &Settings) -> Result<Self, Box<dyn std::error::Error>> {
        let open = NaiveTime::parse_from_str(&settings.open_time, "%H:%M")
            .map_err(|e| format!("invalid open_time '{}': {}", settings.open_time, e))?;
        let close = NaiveTime::parse_from_str(&settings.close_time, "%H:%M")
            .map_err(|e| format!("invalid close_time '{}': {}", settings.close_time, e))?;

        if settings.slot_minutes == 0 {
            return Err("slot_minutes must be greater than zero".into());
        }

        Ok(Self {
            open,
            close,
            step: Duration::minutes(i64::from(settings.slot_minutes)),
        })
    }

    /// All slot times of a day as "HH:MM" strings, in ascending order.
    pub fn times(&self) -> Vec<String> {
        let mut times = Vec::new();
        let mut current = self.open;

        while current <= self.close {
            times.push(current.format("%H:%M").to_string());

            // NaiveTime arithmetic wraps at midnight; stop on rollover.
            let (next, rollover) = current.overflowing_add_signed(self.step);
            if rollover != 0 {
                break;
            }
            current = next;
        }

        times
    }

    /// The full grid with the given times marked booked.
    pub fn availability(&self, booked: &HashSet<String>) -> Vec<Slot> {
        self.times()
            .into_iter()
            .map(|time| Slot {
                booked: booked.contains(&time),
                time,
            })
            .collect()
    }
}
