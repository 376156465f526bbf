//! UnitGo Store - Preference and History Persistence
//!
//! File-backed collaborators around the conversion engine:
//! - `Settings`: display precision, data-size radix, theme
//! - `RecentList`: bounded most-recent conversion history
//! - `StorageManager`: JSON files under a data directory
//!
//! The engine itself persists nothing; callers push loaded settings
//! into it at startup and record conversions here after the fact.

mod error;
mod settings;
mod recents;
mod manager;

pub use error::StoreError;
pub use settings::{Settings, Theme};
pub use recents::{RecentConversion, RecentList, MAX_RECENTS};
pub use manager::{StorageManager, ExportBundle};

#[cfg(test)]
mod tests {
    use super::*;
    use unitgo_core::ConversionEngine;

    #[test]
    fn test_settings_configure_engine() {
        let settings = Settings::default();
        let mut engine = ConversionEngine::with_settings(settings.precision, settings.data_size_mode);
        assert_eq!(engine.precision(), 6);
        assert_eq!(engine.convert(1.0, "gb", "mb").unwrap().formatted, "1000");

        engine.set_data_size_mode(unitgo_core::DataSizeMode::Binary);
        assert_eq!(engine.convert(1.0, "gb", "mb").unwrap().formatted, "1024");
    }

    #[test]
    fn test_recording_an_engine_result() {
        let engine = ConversionEngine::new();
        let result = engine.convert(100.0, "cm", "m").unwrap();

        let mut recents = RecentList::new();
        recents.add(RecentConversion::new("cm", "m", 100.0, result.value));
        assert_eq!(recents.entries()[0].result, 1.0);
    }
}
