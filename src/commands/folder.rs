// Folder commands - list, create, update, delete with reference handling

use crate::models::{isBuiltinFolder, Folder, DEFAULT_FOLDER_ID};
use crate::storage::StorageState;

use super::common::{newId, nonEmpty};

pub fn getFolders(storage: &StorageState) -> Vec<Folder> {
    storage.folders.read().clone()
}

pub fn getFolderById(storage: &StorageState, id: &str) -> Option<Folder> {
    storage.folders.read().iter().find(|f| f.id == id).cloned()
}

/// Count of tasks currently assigned to the folder
pub fn folderTaskCount(storage: &StorageState, id: &str) -> usize {
    storage.tasks.read().iter().filter(|t| t.folderId == id).count()
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct CreateFolderInput {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

pub fn createFolder(storage: &StorageState, input: CreateFolderInput) -> Result<Folder, String> {
    println!(
        "[createFolder] Called with name: {:?}, color: {:?}",
        input.name, input.color
    );

    let name = nonEmpty(&input.name).ok_or("Folder name cannot be empty")?;

    {
        let folders = storage.folders.read();
        if folders.iter().any(|f| f.name.eq_ignore_ascii_case(&name)) {
            println!("[createFolder] Rejected - name collision for {:?}", name);
            return Err(format!("A folder named \"{}\" already exists", name));
        }
    }

    let color = input
        .color
        .as_deref()
        .and_then(nonEmpty)
        .unwrap_or_else(|| "#6366F1".to_string());

    let mut folder = Folder::new(newId(), name, color);
    if let Some(icon) = input.icon.as_deref().and_then(nonEmpty) {
        folder.icon = icon;
    }

    {
        let mut folders = storage.folders.write();
        folders.push(folder.clone());
    }
    storage.saveFolders();

    println!("[createFolder] SUCCESS - created folder id: {}", folder.id);
    Ok(folder)
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct UpdateFolderInput {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

pub fn updateFolder(storage: &StorageState, id: &str, input: UpdateFolderInput) -> Result<(), String> {
    println!("[updateFolder] Called with id: {}", id);

    // A rename must keep display names unique, ignoring case and self
    let newName = match input.name.as_deref() {
        Some(raw) => {
            let name = nonEmpty(raw).ok_or("Folder name cannot be empty")?;
            let folders = storage.folders.read();
            if folders
                .iter()
                .any(|f| f.id != id && f.name.eq_ignore_ascii_case(&name))
            {
                return Err(format!("A folder named \"{}\" already exists", name));
            }
            Some(name)
        }
        None => None,
    };

    {
        let mut folders = storage.folders.write();
        let folder = folders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or("Folder not found")?;

        if let Some(name) = newName {
            folder.name = name;
        }
        if let Some(color) = input.color.as_deref().and_then(nonEmpty) {
            folder.color = color;
        }
        if let Some(icon) = input.icon {
            folder.icon = icon.trim().to_string();
        }
    }
    storage.saveFolders();

    println!("[updateFolder] SUCCESS");
    Ok(())
}

/// Delete a folder. Built-ins are never deletable. When tasks still reference
/// the folder the call is rejected, unless reassign is set, in which case
/// those tasks move to the General folder before the delete proceeds.
pub fn deleteFolder(storage: &StorageState, id: &str, reassign: Option<bool>) -> Result<(), String> {
    println!("[deleteFolder] Called with id: {}, reassign: {:?}", id, reassign);

    if isBuiltinFolder(id) {
        println!("[deleteFolder] Rejected - built-in folder");
        return Err("Built-in folders cannot be deleted".to_string());
    }

    {
        let folders = storage.folders.read();
        if !folders.iter().any(|f| f.id == id) {
            println!("[deleteFolder] Folder does not exist, nothing to do");
            return Ok(());
        }
    }

    let referencing = folderTaskCount(storage, id);
    if referencing > 0 {
        if !reassign.unwrap_or(false) {
            println!("[deleteFolder] Rejected - {} referencing tasks", referencing);
            return Err("This folder contains tasks. Please move or delete them first.".to_string());
        }

        println!(
            "[deleteFolder] Reassigning {} tasks to '{}'",
            referencing, DEFAULT_FOLDER_ID
        );
        {
            let mut tasks = storage.tasks.write();
            for task in tasks.iter_mut().filter(|t| t.folderId == id) {
                task.folderId = DEFAULT_FOLDER_ID.to_string();
            }
        }
        storage.saveTasks();
    }

    {
        let mut folders = storage.folders.write();
        folders.retain(|f| f.id != id);
    }
    storage.saveFolders();

    println!("[deleteFolder] SUCCESS");
    Ok(())
}
