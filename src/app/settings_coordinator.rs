//! Settings persistence coordination.
//!
//! Stores serializable settings in eframe's persistent storage as JSON strings.

use serde::{Deserialize, Serialize};

use crate::state::ViewerSettings;

/// Storage key for the viewer settings.
pub const VIEWER_SETTINGS_KEY: &str = "viewer_settings";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage, falling back to `default`.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if the key is missing or unreadable
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, %err, "failed to serialize setting"),
        }
    }

    /// Loads the viewer settings, replacing invalid stored values with defaults.
    pub fn load_viewer_settings(storage: Option<&dyn eframe::Storage>) -> ViewerSettings {
        Self::load_setting_or(storage, VIEWER_SETTINGS_KEY, ViewerSettings::default()).sanitized()
    }

    pub fn save_viewer_settings(storage: &mut dyn eframe::Storage, settings: &ViewerSettings) {
        Self::save_setting(storage, VIEWER_SETTINGS_KEY, settings);
    }
}
