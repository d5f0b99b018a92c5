use std::fs;
use std::path::PathBuf;

use crate::error::{AppError, Result};
use crate::models::Snapshot;

/// Owns the single persisted snapshot file. Every save overwrites it
/// wholesale; there is never more than one snapshot on disk.
pub struct SnapshotStore {
    data_dir: PathBuf,
    file_name: String,
}

impl SnapshotStore {
    pub fn new(file_name: &str) -> Result<Self> {
        let base_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Persistence("Could not find data directory".to_string()))?
            .join("carbonfootprint");
        Self::with_dir(base_dir, file_name)
    }

    pub fn with_dir(data_dir: PathBuf, file_name: &str) -> Result<Self> {
        fs::create_dir_all(&data_dir)
            .map_err(|e| AppError::Persistence(format!("Failed to create data directory: {}", e)))?;
        Ok(Self {
            data_dir,
            file_name: file_name.to_string(),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| AppError::Persistence(format!("Failed to serialize snapshot: {}", e)))?;
        fs::write(self.path(), json)
            .map_err(|e| AppError::Persistence(format!("Failed to write snapshot file: {}", e)))
    }

    pub fn load(&self) -> Result<Snapshot> {
        let path = self.path();
        if !path.exists() {
            return Err(AppError::Persistence("No saved data found".to_string()));
        }
        let contents = fs::read_to_string(&path)
            .map_err(|e| AppError::Persistence(format!("Failed to read snapshot file: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::Persistence(format!("Failed to parse snapshot: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::{Region, UnitSystem};
    use crate::models::FormInput;
    use chrono::Utc;

    fn temp_store() -> SnapshotStore {
        let dir = std::env::temp_dir().join(format!("carbonfootprint_store_{}", uuid::Uuid::new_v4()));
        SnapshotStore::with_dir(dir, "footprint_data.json").unwrap()
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = temp_store();
        let form = FormInput::from_values([900.0, 50.0, 9000.0, 1600.0, 2.0, 7.0]);
        let snapshot = Snapshot::from_form(&form, Region::Eu, UnitSystem::Metric, Utc::now());

        store.save(&snapshot).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), snapshot);

        fs::remove_dir_all(store.data_dir).ok();
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let store = temp_store();
        let first = Snapshot::from_form(
            &FormInput::from_values([1.0; 6]),
            Region::Us,
            UnitSystem::Metric,
            Utc::now(),
        );
        let second = Snapshot::from_form(
            &FormInput::from_values([2.0; 6]),
            Region::In,
            UnitSystem::Imperial,
            Utc::now(),
        );

        store.save(&first).unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap(), second);

        fs::remove_dir_all(store.data_dir).ok();
    }

    #[test]
    fn test_load_missing_file_reports_persistence_error() {
        let store = temp_store();
        assert!(!store.exists());
        assert!(matches!(
            store.load().unwrap_err(),
            AppError::Persistence(_)
        ));

        fs::remove_dir_all(store.data_dir).ok();
    }
}
