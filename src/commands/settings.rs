// Preference commands

use crate::models::{DefaultView, NotificationPrefs, Preferences, TabFilter, Theme};
use crate::storage::StorageState;

pub fn getPreferences(storage: &StorageState) -> Preferences {
    storage.preferences.read().clone()
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct UpdatePreferencesInput {
    pub theme: Option<Theme>,
    pub defaultView: Option<DefaultView>,
    pub defaultTab: Option<TabFilter>,
    pub notifications: Option<NotificationPrefs>,
}

pub fn updatePreferences(storage: &StorageState, input: UpdatePreferencesInput) {
    println!(
        "[updatePreferences] Updates - theme: {:?}, defaultView: {:?}, defaultTab: {:?}",
        input.theme, input.defaultView, input.defaultTab
    );

    {
        let mut preferences = storage.preferences.write();
        if let Some(theme) = input.theme {
            preferences.theme = theme;
        }
        if let Some(defaultView) = input.defaultView {
            preferences.defaultView = defaultView;
        }
        if let Some(defaultTab) = input.defaultTab {
            preferences.defaultTab = defaultTab;
        }
        if let Some(notifications) = input.notifications {
            preferences.notifications = notifications;
        }
    }
    storage.savePreferences();

    println!("[updatePreferences] SUCCESS");
}
