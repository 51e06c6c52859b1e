use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An entry in the public services catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_range: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Pending => f.write_str("Pending"),
            ReservationStatus::Confirmed => f.write_str("Confirmed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    /// Service name at the time of booking.
    pub service: String,
    pub date: NaiveDate,
    pub guests: u32,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comments: String,
}

/// What a client submits from the portal.
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub service_id: String,
    pub date: NaiveDate,
    pub guests: u32,
    pub comments: String,
}
