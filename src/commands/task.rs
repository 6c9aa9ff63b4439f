// Task commands - list, create, toggle, edit, delete, move, filter

use crate::models::{Priority, TabFilter, Task, DEFAULT_FOLDER_ID};
use crate::storage::StorageState;

use super::common::{newId, nonEmpty};

/// Pure filter over a task list: folder match first, then completion state.
/// "all" (or no folder) matches every task, including orphaned ones.
pub fn filterTasks(tasks: &[Task], folderId: Option<&str>, tab: TabFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| match folderId {
            None | Some("all") => true,
            Some(f) => t.folderId == f,
        })
        .filter(|t| match tab {
            TabFilter::All => true,
            TabFilter::Pending => !t.completed,
            TabFilter::Completed => t.completed,
        })
        .cloned()
        .collect()
}

pub fn getTasks(storage: &StorageState, folderId: Option<String>, tab: Option<String>) -> Vec<Task> {
    let tasks = storage.tasks.read();
    // Unknown filter names fall back to showing everything
    let tabFilter = tab
        .as_deref()
        .and_then(TabFilter::fromName)
        .unwrap_or_default();
    filterTasks(&tasks, folderId.as_deref(), tabFilter)
}

pub fn getTaskById(storage: &StorageState, id: &str) -> Option<Task> {
    storage.tasks.read().iter().find(|t| t.id == id).cloned()
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub folderId: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub dueDate: Option<i64>,
}

pub fn createTask(storage: &StorageState, input: CreateTaskInput) -> Result<Task, String> {
    println!(
        "[createTask] Called with title: {:?}, folderId: {:?}",
        input.title, input.folderId
    );

    let title = nonEmpty(&input.title).ok_or("Task title cannot be empty")?;

    // "all" is a view pseudo-folder, never an assignment target; unknown
    // folders also fall back so a task is always created against a real one
    let folderId = match input.folderId {
        Some(f) if f != "all" && !f.is_empty() => {
            let folders = storage.folders.read();
            if folders.iter().any(|folder| folder.id == f) {
                f
            } else {
                println!("[createTask] Unknown folder '{}', using default", f);
                DEFAULT_FOLDER_ID.to_string()
            }
        }
        _ => DEFAULT_FOLDER_ID.to_string(),
    };

    let mut task = Task::new(newId(), title, folderId);
    if let Some(description) = input.description {
        task.description = nonEmpty(&description);
    }
    if let Some(priority) = input.priority {
        task.priority = priority;
    }
    if let Some(dueDate) = input.dueDate {
        task.dueDate = Some(dueDate);
    }

    {
        let mut tasks = storage.tasks.write();
        // Newest first, matching the list view ordering
        tasks.insert(0, task.clone());
    }
    storage.saveTasks();

    println!("[createTask] SUCCESS - created task id: {}", task.id);
    Ok(task)
}

/// Flip completion on the matching task; unknown ids are silently ignored
pub fn toggleTask(storage: &StorageState, id: &str) {
    println!("[toggleTask] Called with id: {}", id);
    {
        let mut tasks = storage.tasks.write();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }
    storage.saveTasks();
}

/// Remove the matching task; unknown ids are silently ignored
pub fn deleteTask(storage: &StorageState, id: &str) {
    println!("[deleteTask] Called with id: {}", id);
    {
        let mut tasks = storage.tasks.write();
        tasks.retain(|t| t.id != id);
    }
    storage.saveTasks();
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub folderId: Option<String>,
    pub priority: Option<Priority>,
    pub dueDate: Option<i64>,
    pub completed: Option<bool>,
}

/// Apply a partial field update to the matching task; unknown ids are
/// silently ignored. A folderId patch only applies when the folder exists.
pub fn updateTask(storage: &StorageState, id: &str, input: UpdateTaskInput) {
    println!("[updateTask] Called with id: {}", id);

    let targetFolder = input.folderId.filter(|f| {
        let folders = storage.folders.read();
        folders.iter().any(|folder| folder.id == *f)
    });

    {
        let mut tasks = storage.tasks.write();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            if let Some(ref title) = input.title {
                if let Some(title) = nonEmpty(title) {
                    task.title = title;
                }
            }
            if let Some(ref description) = input.description {
                task.description = nonEmpty(description);
            }
            if let Some(folderId) = targetFolder {
                task.folderId = folderId;
            }
            if let Some(priority) = input.priority {
                task.priority = priority;
            }
            if let Some(dueDate) = input.dueDate {
                task.dueDate = Some(dueDate);
            }
            if let Some(completed) = input.completed {
                task.completed = completed;
            }
        }
    }
    storage.saveTasks();
}

/// Reassign a task to another folder; the target must exist
pub fn moveTaskToFolder(storage: &StorageState, id: &str, folderId: &str) -> Result<(), String> {
    println!("[moveTaskToFolder] Called with id: {}, folderId: {}", id, folderId);

    {
        let folders = storage.folders.read();
        if !folders.iter().any(|f| f.id == folderId) {
            return Err("Folder not found".to_string());
        }
    }

    {
        let mut tasks = storage.tasks.write();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or("Task not found")?;
        task.folderId = folderId.to_string();
    }
    storage.saveTasks();

    println!("[moveTaskToFolder] SUCCESS");
    Ok(())
}
