//! Settings persistence coordination.
//!
//! Persists the agenda options through eframe's storage so the configured
//! view survives restarts. Values are stored as JSON strings.

use ragenda::AgendaOptions;
use serde::{Deserialize, Serialize};

/// Storage key for the agenda options.
const OPTIONS_KEY: &str = "agenda_options";

/// Coordinates persistence of viewer settings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the agenda options, falling back to defaults when absent or
    /// unparseable. The result is normalized before use.
    pub fn load_options(storage: Option<&dyn eframe::Storage>) -> AgendaOptions {
        Self::load_setting_or(storage, OPTIONS_KEY, AgendaOptions::default()).normalized()
    }

    /// Saves the agenda options.
    pub fn save_options(storage: &mut dyn eframe::Storage, options: &AgendaOptions) {
        Self::save_setting(storage, OPTIONS_KEY, options);
    }

    /// Loads any serializable setting with a custom fallback.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let Some(storage) = storage else {
            return default;
        };
        storage
            .get_string(key)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or(default)
    }

    /// Saves any serializable setting.
    pub fn save_setting<T: Serialize>(storage: &mut dyn eframe::Storage, key: &str, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            storage.set_string(key, json);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_options_round_trip() {
        let mut storage = MockStorage::new();
        let options = AgendaOptions {
            all_day_slot: false,
            scroll_time_minutes: 480,
            ..Default::default()
        };

        SettingsCoordinator::save_options(&mut storage, &options);
        let loaded = SettingsCoordinator::load_options(Some(&storage));

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_options_fall_back_to_defaults() {
        let storage = MockStorage::new();
        let loaded = SettingsCoordinator::load_options(Some(&storage));
        assert_eq!(loaded, AgendaOptions::default());
    }

    #[test]
    fn test_corrupt_options_fall_back_to_defaults() {
        let mut storage = MockStorage::new();
        storage.set_string(OPTIONS_KEY, "not json".to_string());
        let loaded = SettingsCoordinator::load_options(Some(&storage));
        assert_eq!(loaded, AgendaOptions::default());
    }
}
