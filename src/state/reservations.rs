use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::constants::MIN_RESERVATION_GUESTS;
use crate::error::{CateringError, Result};
use crate::models::{Reservation, ReservationRequest, ReservationStatus, ServiceOffering};

const CUSTOM_SERVICE: &str = "Custom service";

/// The client portal: catalog plus reservation requests, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationDesk {
    #[serde(default)]
    catalog: Vec<ServiceOffering>,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

impl ReservationDesk {
    pub fn new(catalog: Vec<ServiceOffering>, reservations: Vec<Reservation>) -> Self {
        Self {
            catalog,
            reservations,
        }
    }

    pub fn catalog(&self) -> &[ServiceOffering] {
        &self.catalog
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// File a request. It starts out pending.
    pub fn submit(&mut self, request: ReservationRequest) -> Result<&Reservation> {
        if request.guests < MIN_RESERVATION_GUESTS {
            return Err(CateringError::InvalidArgument(format!(
                "reservations need at least {} guests",
                MIN_RESERVATION_GUESTS
            )));
        }

        let service = self
            .catalog
            .iter()
            .find(|s| s.id == request.service_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| CUSTOM_SERVICE.to_string());

        let reservation = Reservation {
            id: Uuid::new_v4().to_string(),
            service,
            date: request.date,
            guests: request.guests,
            status: ReservationStatus::Pending,
            comments: request.comments,
        };
        info!(service = %reservation.service, guests = reservation.guests, "reservation requested");
        self.reservations.insert(0, reservation);
        Ok(&self.reservations[0])
    }

    /// The first `n` reservations by date, latest first.
    pub fn most_recent(&self, n: usize) -> Vec<&Reservation> {
        let mut sorted: Vec<&Reservation> = self.reservations.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(n);
        sorted
    }
}
