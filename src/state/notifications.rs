use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Notification, NotificationCategory, NotificationPreferences};

/// Notification feed (newest first) and the user's category preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationCenter {
    #[serde(default)]
    notifications: Vec<Notification>,
    #[serde(default)]
    preferences: NotificationPreferences,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            preferences: NotificationPreferences::default(),
        }
    }

    pub fn add(&mut self, notification: Notification) {
        debug!(category = %notification.category, title = %notification.title, "notification added");
        self.notifications.insert(0, notification);
    }

    /// Returns false when no notification has that id.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn toggle_preference(&mut self, category: NotificationCategory) -> bool {
        self.preferences.toggle(category)
    }

    pub fn preferences(&self) -> &NotificationPreferences {
        &self.preferences
    }

    /// Notifications in categories the user has left enabled.
    pub fn visible(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| self.preferences.is_enabled(n.category))
            .collect()
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(id: &str, category: NotificationCategory, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: id.to_string(),
            message: String::new(),
            timestamp: Utc::now(),
            category,
            read,
        }
    }

    #[test]
    fn test_add_prepends_and_counts_unread() {
        let mut center = NotificationCenter::new(vec![note("a", NotificationCategory::Events, true)]);
        center.add(note("b", NotificationCategory::Inventory, false));
        assert_eq!(center.all()[0].id, "b");
        assert_eq!(center.unread_count(), 1);

        assert!(center.mark_as_read("b"));
        assert!(!center.mark_as_read("zzz"));
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn test_visible_respects_preferences() {
        let mut center = NotificationCenter::new(vec![
            note("a", NotificationCategory::Events, false),
            note("b", NotificationCategory::Finance, false),
        ]);
        assert_eq!(center.visible().len(), 2);

        center.toggle_preference(NotificationCategory::Finance);
        let visible: Vec<&str> = center.visible().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(visible, vec!["a"]);
    }
}
