// Task model
// UUID for stable ID, millisecond timestamps, folder reference by ID

use serde::{Deserialize, Serialize};

use super::common::Priority;

/// A single user-entered work item with completion state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String, // UUID - stable identifier
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub createdAt: i64,
    #[serde(default)]
    pub priority: Priority,
    // May point at a deleted folder; readers treat that as uncategorized
    pub folderId: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dueDate: Option<i64>,
}

impl Task {
    pub fn new(id: String, title: String, folderId: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id,
            title,
            description: None,
            completed: false,
            createdAt: now,
            priority: Priority::default(),
            folderId,
            dueDate: None,
        }
    }
}
