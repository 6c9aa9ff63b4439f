// Key-value storage layer for TaskFlow
// Whole JSON documents stored under string keys in the user data directory

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::models::{builtinFolders, Folder, Preferences, Task};

// ============================================
// STORAGE KEYS
// ============================================

pub const TODOS_KEY: &str = "todos";
pub const FOLDERS_KEY: &str = "folders";
pub const PREFERENCES_KEY: &str = "user_preferences";
pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";

// ============================================
// PATH HELPERS
// ============================================

/// Global data directory (~/.taskflow/)
pub fn globalDataDir() -> PathBuf {
    let home = dirs::home_dir().expect("Failed to get home directory");
    home.join(".taskflow")
}

// ============================================
// STORE ADAPTER
// ============================================

/// Raw string persistence under a named key. Implementations only deal in
/// strings; JSON encoding and the default fallback live in load/save below.
pub trait StoreAdapter: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Decode the value stored under key, falling back to default when the key
/// is absent or the payload fails to parse. The default is never persisted.
pub fn load<T: DeserializeOwned>(store: &dyn StoreAdapter, key: &str, default: T) -> T {
    match store.read(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                println!("[load] Failed to parse '{}': {}", key, e);
                default
            }
        },
        None => default,
    }
}

/// Encode a value as JSON and write it wholesale under key, overwriting any
/// prior value. Failures are logged and swallowed; callers keep their
/// in-memory state either way.
pub fn save<T: Serialize>(store: &dyn StoreAdapter, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(e) = store.write(key, &raw) {
                println!("[save] Failed to write '{}': {}", key, e);
            }
        }
        Err(e) => println!("[save] Failed to encode '{}': {}", key, e),
    }
}

/// Filesystem-backed store: one .json file per key under the root directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn keyPath(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StoreAdapter for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.keyPath(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        fs::create_dir_all(&self.root).map_err(|e| e.to_string())?;
        fs::write(self.keyPath(key), value).map_err(|e| e.to_string())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl StoreAdapter for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================
// STORAGE STATE
// ============================================

/// Main storage manager: the in-memory session state plus the adapter that
/// persists it. Every mutating command writes the affected list back through
/// the adapter before returning.
pub struct Storage {
    pub store: Box<dyn StoreAdapter>,
    pub tasks: RwLock<Vec<Task>>,
    pub folders: RwLock<Vec<Folder>>,
    pub preferences: RwLock<Preferences>,
}

impl Storage {
    pub fn new(store: Box<dyn StoreAdapter>) -> Self {
        println!("[Storage::new] Initializing storage...");

        let tasks: Vec<Task> = load(store.as_ref(), TODOS_KEY, Vec::new());
        let folders: Vec<Folder> = load(store.as_ref(), FOLDERS_KEY, builtinFolders());
        let preferences: Preferences = load(store.as_ref(), PREFERENCES_KEY, Preferences::default());

        println!(
            "[Storage::new] Loaded {} tasks and {} folders",
            tasks.len(),
            folders.len()
        );

        Self {
            store,
            tasks: RwLock::new(tasks),
            folders: RwLock::new(folders),
            preferences: RwLock::new(preferences),
        }
    }

    pub fn saveTasks(&self) {
        save(self.store.as_ref(), TODOS_KEY, &*self.tasks.read());
    }

    pub fn saveFolders(&self) {
        save(self.store.as_ref(), FOLDERS_KEY, &*self.folders.read());
    }

    pub fn savePreferences(&self) {
        save(self.store.as_ref(), PREFERENCES_KEY, &*self.preferences.read());
    }
}

pub type StorageState = Arc<Storage>;

/// Initialize storage backed by the global data directory
pub fn initStorage() -> Result<StorageState, String> {
    Ok(Arc::new(Storage::new(Box::new(FileStore::new(globalDataDir())))))
}

/// Initialize storage over an in-memory adapter (tests, ephemeral sessions)
pub fn initMemoryStorage() -> StorageState {
    Arc::new(Storage::new(Box::new(MemoryStore::default())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = MemoryStore::default();
        let task = Task::new("t1".to_string(), "Write report".to_string(), "work".to_string());

        save(&store, TODOS_KEY, &vec![task.clone()]);
        let loaded: Vec<Task> = load(&store, TODOS_KEY, Vec::new());

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, task.id);
        assert_eq!(loaded[0].title, task.title);
        assert_eq!(loaded[0].folderId, task.folderId);
        assert_eq!(loaded[0].priority, Priority::Medium);
        assert!(!loaded[0].completed);
    }

    #[test]
    fn test_load_missing_key_returns_default() {
        let store = MemoryStore::default();
        let loaded: Vec<Task> = load(&store, TODOS_KEY, Vec::new());
        assert!(loaded.is_empty());

        // A read must not write the default back
        assert!(store.read(TODOS_KEY).is_none());
    }

    #[test]
    fn test_load_corrupted_value_returns_default() {
        let store = MemoryStore::default();
        store.write(PREFERENCES_KEY, "{not json").unwrap();

        let prefs: Preferences = load(&store, PREFERENCES_KEY, Preferences::default());
        assert_eq!(prefs.theme, crate::models::Theme::System);

        // The corrupted payload stays untouched until the next save
        assert_eq!(store.read(PREFERENCES_KEY).unwrap(), "{not json");
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        save(&store, FOLDERS_KEY, &builtinFolders());
        let loaded: Vec<Folder> = load(&store, FOLDERS_KEY, Vec::new());

        assert_eq!(loaded.len(), 3);
        assert!(loaded.iter().any(|f| f.name == "General"));
    }

    #[test]
    fn test_storage_seeds_builtin_folders_when_store_empty() {
        let storage = initMemoryStorage();
        let folders = storage.folders.read();

        assert_eq!(folders.len(), 3);
        assert!(folders.iter().any(|f| f.id == "general"));
        assert!(folders.iter().any(|f| f.id == "work"));
        assert!(folders.iter().any(|f| f.id == "personal"));
    }
}
