// Folder model
// A named, colored grouping bucket for tasks

use serde::{Deserialize, Serialize};

/// Identifier of the built-in folder that orphaned tasks fall back to
pub const DEFAULT_FOLDER_ID: &str = "general";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: String, // UUID for user folders, fixed names for built-ins
    pub name: String,
    #[serde(default = "default_folder_color")]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    pub createdAt: i64,
}

fn default_folder_color() -> String {
    "#6366F1".to_string()
}

impl Folder {
    pub fn new(id: String, name: String, color: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id,
            name,
            color,
            icon: String::new(),
            createdAt: now,
        }
    }
}

/// Folders seeded on first launch. Their IDs are fixed and non-deletable.
pub fn builtinFolders() -> Vec<Folder> {
    [
        ("general", "General", "#6366F1"),
        ("work", "Work", "#EC4899"),
        ("personal", "Personal", "#8B5CF6"),
    ]
    .into_iter()
    .map(|(id, name, color)| Folder::new(id.to_string(), name.to_string(), color.to_string()))
    .collect()
}

pub fn isBuiltinFolder(id: &str) -> bool {
    matches!(id, "general" | "work" | "personal")
}
