//! Settings domain.
//!
//! Emergency contacts, the Notion connection and the notification
//! preferences. All of it lives in memory for the tab lifetime; the Notion
//! "connection" is a visual state change, nothing is linked for real.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact pinged by the S.O.S. flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub phone: String,
}

/// State of the Notion workspace link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotionConnection {
    #[default]
    Disconnected,
    Connected {
        page_id: String,
    },
}

/// Notification preference switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub push: bool,
    pub email_alerts: bool,
    pub sound_effects: bool,
    pub streak_reminders: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            push: true,
            email_alerts: false,
            sound_effects: true,
            streak_reminders: true,
        }
    }
}

/// Keys for toggling a single notification preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Push,
    EmailAlerts,
    SoundEffects,
    StreakReminders,
}

/// Holds the user-editable settings for the current session.
pub struct SettingsService {
    contacts: Vec<EmergencyContact>,
    notion: NotionConnection,
    notifications: NotificationPrefs,
}

impl SettingsService {
    /// Starts with the seeded default contact, no Notion link and the
    /// default notification switches.
    pub fn new() -> Self {
        Self {
            contacts: vec![EmergencyContact {
                id: Uuid::new_v4().to_string(),
                name: "Emergency Contact 1".to_string(),
                phone: "+55 11 99999-9999".to_string(),
            }],
            notion: NotionConnection::Disconnected,
            notifications: NotificationPrefs::default(),
        }
    }

    pub fn contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    /// Adds a contact with a generated id. Blank name or phone is
    /// rejected and nothing is added.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> Option<&EmergencyContact> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() || phone.is_empty() {
            return None;
        }

        self.contacts.push(EmergencyContact {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        });
        self.contacts.last()
    }

    /// Removes a contact by id. Returns whether anything was removed.
    pub fn remove_contact(&mut self, id: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        self.contacts.len() != before
    }

    pub fn notion(&self) -> &NotionConnection {
        &self.notion
    }

    /// Connects the Notion workspace. A blank page id is rejected;
    /// reconnecting replaces the linked page.
    pub fn connect_notion(&mut self, page_id: &str) -> bool {
        let page_id = page_id.trim();
        if page_id.is_empty() {
            return false;
        }

        self.notion = NotionConnection::Connected {
            page_id: page_id.to_string(),
        };
        true
    }

    pub fn notifications(&self) -> &NotificationPrefs {
        &self.notifications
    }

    /// Flips one notification switch.
    pub fn toggle_notification(&mut self, kind: NotificationKind) {
        let prefs = &mut self.notifications;
        match kind {
            NotificationKind::Push => prefs.push = !prefs.push,
            NotificationKind::EmailAlerts => prefs.email_alerts = !prefs.email_alerts,
            NotificationKind::SoundEffects => prefs.sound_effects = !prefs.sound_effects,
            NotificationKind::StreakReminders => prefs.streak_reminders = !prefs.streak_reminders,
        }
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}
