//! File-backed storage for settings and recents

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use crate::{RecentConversion, RecentList, Settings, StoreError};

const SETTINGS_FILE: &str = "settings.json";
const RECENTS_FILE: &str = "recents.json";

/// Everything the store persists, as one bundle for backup/restore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub settings: Settings,
    pub recents: RecentList,
}

/// Owns the data directory and the JSON files inside it.
///
/// Loads are lenient: a missing or malformed file yields defaults, so
/// a damaged store never blocks startup. Writes report their errors.
pub struct StorageManager {
    base: PathBuf,
}

impl StorageManager {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        StorageManager { base: base.into() }
    }

    /// Resolve the data directory from the environment
    pub fn from_env() -> Self {
        let base = env::var("UNITGO_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".unitgo"));
        StorageManager { base }
    }

    pub fn base_path(&self) -> &Path {
        &self.base
    }

    pub fn load_settings(&self) -> Settings {
        self.load_lenient(SETTINGS_FILE)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.save(SETTINGS_FILE, settings)
    }

    pub fn load_recents(&self) -> RecentList {
        self.load_lenient(RECENTS_FILE)
    }

    /// Record a conversion and persist the updated list
    pub fn add_recent(&self, record: RecentConversion) -> Result<RecentList, StoreError> {
        let mut recents = self.load_recents();
        recents.add(record);
        self.save(RECENTS_FILE, &recents)?;
        Ok(recents)
    }

    pub fn clear_recents(&self) -> Result<(), StoreError> {
        self.save(RECENTS_FILE, &RecentList::new())
    }

    /// Bundle the whole store for backup
    pub fn export_data(&self) -> ExportBundle {
        ExportBundle {
            settings: self.load_settings(),
            recents: self.load_recents(),
        }
    }

    /// Restore a previously exported bundle, replacing both files
    pub fn import_data(&self, json: &str) -> Result<ExportBundle, StoreError> {
        let bundle: ExportBundle = serde_json::from_str(json)?;
        self.save_settings(&bundle.settings)?;
        self.save(RECENTS_FILE, &bundle.recents)?;
        Ok(bundle)
    }

    fn load_lenient<T: Default + for<'de> Deserialize<'de>>(&self, file: &str) -> T {
        let path = self.base.join(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = %path.display(), "store file missing, using defaults");
                return T::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed store file, using defaults");
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base)?;
        let path = self.base.join(file);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), "store file written");
        Ok(())
    }
}
