// Models module for TaskFlow
// All fields use camelCase for consistency with the stored JSON

pub mod common;
pub mod config;
pub mod folder;
pub mod task;
pub mod user;

pub use common::{Priority, TabFilter};
pub use config::{DefaultView, NotificationPrefs, Preferences, Theme};
pub use folder::{builtinFolders, isBuiltinFolder, Folder, DEFAULT_FOLDER_ID};
pub use task::Task;
pub use user::{CurrentUser, UserAccount};
