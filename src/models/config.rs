// Preference models for TaskFlow
// Persisted wholesale under the user_preferences key

use serde::{Deserialize, Serialize};

use super::common::TabFilter;

/// Color theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Default task list layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    #[default]
    List,
    Grid,
}

/// Notification toggles and schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub enableReminders: bool,
    pub enableSummary: bool,
    pub reminderTime: String,
    pub summaryDay: String,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            enableReminders: true,
            enableSummary: true,
            reminderTime: "09:00".to_string(),
            summaryDay: "monday".to_string(),
        }
    }
}

/// All user preferences (simple enum/toggle mapping, defaults on any decode failure)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub defaultView: DefaultView,
    #[serde(default)]
    pub defaultTab: TabFilter,
    #[serde(default)]
    pub notifications: NotificationPrefs,
}
