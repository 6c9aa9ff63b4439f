// Simulated local account records
// No real authentication: registration writes plain records to the store

use serde::{Deserialize, Serialize};

/// Full account entry kept in the users list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub createdAt: i64,
}

/// Slim record persisted under the currentUser key after register/login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&UserAccount> for CurrentUser {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
        }
    }
}
