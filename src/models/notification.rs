use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CateringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Events,
    Inventory,
    Reservations,
    Finance,
    System,
}

impl NotificationCategory {
    pub const ALL: [NotificationCategory; 5] = [
        NotificationCategory::Events,
        NotificationCategory::Inventory,
        NotificationCategory::Reservations,
        NotificationCategory::Finance,
        NotificationCategory::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Events => "events",
            NotificationCategory::Inventory => "inventory",
            NotificationCategory::Reservations => "reservations",
            NotificationCategory::Finance => "finance",
            NotificationCategory::System => "system",
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationCategory {
    type Err = CateringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        NotificationCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                CateringError::InvalidArgument(format!("unknown notification category '{}'", s))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub category: NotificationCategory,
    #[serde(default)]
    pub read: bool,
}

/// Which categories the user wants to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub events: bool,
    pub inventory: bool,
    pub reservations: bool,
    pub finance: bool,
    pub system: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            events: true,
            inventory: true,
            reservations: true,
            finance: true,
            system: true,
        }
    }
}

impl NotificationPreferences {
    pub fn is_enabled(&self, category: NotificationCategory) -> bool {
        match category {
            NotificationCategory::Events => self.events,
            NotificationCategory::Inventory => self.inventory,
            NotificationCategory::Reservations => self.reservations,
            NotificationCategory::Finance => self.finance,
            NotificationCategory::System => self.system,
        }
    }

    fn slot_mut(&mut self, category: NotificationCategory) -> &mut bool {
        match category {
            NotificationCategory::Events => &mut self.events,
            NotificationCategory::Inventory => &mut self.inventory,
            NotificationCategory::Reservations => &mut self.reservations,
            NotificationCategory::Finance => &mut self.finance,
            NotificationCategory::System => &mut self.system,
        }
    }

    /// Flip one category; returns the new value.
    pub fn toggle(&mut self, category: NotificationCategory) -> bool {
        let slot = self.slot_mut(category);
        *slot = !*slot;
        *slot
    }
}
