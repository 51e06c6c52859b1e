use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{CateringError, Result};
use crate::models::{CateringEvent, EventMenuItem, EventStatus};
use crate::state::menus::MenuBook;

/// Form input for scheduling an event.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub client: String,
    pub date: NaiveDate,
    pub event_type: String,
    pub attendees: u32,
    pub status: EventStatus,
    pub notes: String,
    pub menu_id: Option<String>,
}

/// Scheduled events, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventBook {
    events: Vec<CateringEvent>,
}

impl EventBook {
    pub fn new(events: Vec<CateringEvent>) -> Self {
        Self { events }
    }

    /// Schedule an event from a draft. Each dish of the chosen menu is booked
    /// at the menu's per-guest price.
    pub fn create(&mut self, draft: EventDraft, menus: &MenuBook) -> &CateringEvent {
        let assigned_menus = draft
            .menu_id
            .as_deref()
            .and_then(|id| menus.get(id))
            .map(|menu| {
                menu.dishes
                    .iter()
                    .map(|dish| EventMenuItem {
                        id: dish.id.clone(),
                        name: dish.name.clone(),
                        price_per_guest: menu.estimated_price,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let event = CateringEvent {
            id: Uuid::new_v4().to_string(),
            client: draft.client,
            date: draft.date,
            event_type: draft.event_type,
            attendees: draft.attendees,
            status: draft.status,
            assigned_menus,
            staff: Vec::new(),
            inventory_needs: Vec::new(),
            notes: Some(draft.notes).filter(|n| !n.is_empty()),
            timeline: Vec::new(),
        };
        info!(client = %event.client, date = %event.date, "scheduled event");
        self.events.insert(0, event);
        &self.events[0]
    }

    /// Events whose client contains `client_term` (case-insensitive) and, if
    /// given, whose status matches.
    pub fn filter(&self, client_term: &str, status: Option<EventStatus>) -> Vec<&CateringEvent> {
        let term = client_term.to_lowercase();
        self.events
            .iter()
            .filter(|e| e.client.to_lowercase().contains(&term))
            .filter(|e| status.is_none_or(|s| e.status == s))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&CateringEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn set_status(&mut self, id: &str, status: EventStatus) -> Result<()> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CateringError::NotFound(format!("event {}", id)))?;
        info!(id, from = %event.status, to = %status, "event status changed");
        event.status = status;
        Ok(())
    }

    pub fn timeline_progress(&self, id: &str) -> Option<(usize, usize)> {
        self.get(id).map(CateringEvent::timeline_progress)
    }

    pub fn all(&self) -> &[CateringEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
