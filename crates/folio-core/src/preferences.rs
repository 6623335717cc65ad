//! Persistent preference storage using redb.
//!
//! Holds exactly one key today: `"theme"`, `"light"` or `"dark"` once the
//! user has toggled, absent until then.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::ambient::Theme;
use crate::error::FolioError;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// Local key-value store for UI preferences.
#[derive(Clone)]
pub struct PreferenceStore {
    db: Arc<RwLock<Database>>,
}

impl PreferenceStore {
    /// Open (or create) the store at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), FolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Saved theme, or `None` when the user never picked one.
    pub fn load_theme(&self) -> Result<Option<Theme>, FolioError> {
        Ok(self.get(THEME_KEY)?.map(|token| Theme::from_token(&token)))
    }

    /// Persist an explicit theme choice. A saved choice overrides the
    /// system preference on later starts.
    pub fn save_theme(&self, theme: Theme) -> Result<(), FolioError> {
        self.set(THEME_KEY, theme.as_str())
    }
}
