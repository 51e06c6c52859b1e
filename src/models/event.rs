use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CateringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Draft,
    Scheduled,
    InProgress,
    Completed,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Draft,
        EventStatus::Scheduled,
        EventStatus::InProgress,
        EventStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Scheduled => "scheduled",
            EventStatus::InProgress => "in-progress",
            EventStatus::Completed => "completed",
        }
    }

    /// Upcoming or running; what the dashboard counts as scheduled.
    pub fn is_active(&self) -> bool {
        matches!(self, EventStatus::Scheduled | EventStatus::InProgress)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().replace('-', " "))
    }
}

impl FromStr for EventStatus {
    type Err = CateringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace([' ', '_'], "-");
        EventStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| CateringError::InvalidArgument(format!("unknown event status '{}'", s)))
    }
}

/// A menu as booked on an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMenuItem {
    pub id: String,
    pub name: String,
    pub price_per_guest: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: String,
    pub label: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CateringEvent {
    pub id: String,
    pub client: String,
    pub date: NaiveDate,
    pub event_type: String,
    pub attendees: u32,
    pub status: EventStatus,
    #[serde(default)]
    pub assigned_menus: Vec<EventMenuItem>,
    #[serde(default)]
    pub staff: Vec<String>,
    #[serde(default)]
    pub inventory_needs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
}

impl CateringEvent {
    /// Revenue implied by the booked menus.
    pub fn projected_revenue(&self) -> Decimal {
        let per_guest: Decimal = self.assigned_menus.iter().map(|m| m.price_per_guest).sum();
        per_guest * Decimal::from(self.attendees)
    }

    /// (completed, total) timeline milestones.
    pub fn timeline_progress(&self) -> (usize, usize) {
        let done = self.timeline.iter().filter(|t| t.completed).count();
        (done, self.timeline.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("in-progress".parse::<EventStatus>().unwrap(), EventStatus::InProgress);
        assert_eq!("In Progress".parse::<EventStatus>().unwrap(), EventStatus::InProgress);
        assert_eq!("draft".parse::<EventStatus>().unwrap(), EventStatus::Draft);
        assert!("cancelled".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let json = serde_json::to_string(&EventStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_projected_revenue() {
        let event = CateringEvent {
            id: "evt-1".to_string(),
            client: "Hotel Aurora".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            event_type: "Gala".to_string(),
            attendees: 100,
            status: EventStatus::Scheduled,
            assigned_menus: vec![
                EventMenuItem {
                    id: "menu-1".to_string(),
                    name: "Mains".to_string(),
                    price_per_guest: Decimal::new(45, 0),
                },
                EventMenuItem {
                    id: "menu-2".to_string(),
                    name: "Desserts".to_string(),
                    price_per_guest: Decimal::new(12, 0),
                },
            ],
            staff: vec![],
            inventory_needs: vec![],
            notes: None,
            timeline: vec![],
        };
        assert_eq!(event.projected_revenue(), Decimal::new(5700, 0));
        assert_eq!(event.timeline_progress(), (0, 0));
    }
}
