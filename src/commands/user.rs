// Simulated account commands
// Records live in the same local store as everything else; there is no
// server, no hashing, no session beyond the currentUser record

use crate::models::{CurrentUser, UserAccount};
use crate::storage::{load, save, StorageState, CURRENT_USER_KEY, USERS_KEY};

use super::common::{newId, nonEmpty, now};

#[derive(Debug, Default, serde::Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn registerUser(storage: &StorageState, input: RegisterInput) -> Result<CurrentUser, String> {
    println!("[registerUser] Called with email: {:?}", input.email);

    let name = nonEmpty(&input.name);
    let email = nonEmpty(&input.email);
    let password = nonEmpty(&input.password);
    let (name, email, password) = match (name, email, password) {
        (Some(n), Some(e), Some(p)) => (n, e, p),
        _ => return Err("Please fill in all fields".to_string()),
    };

    let mut users: Vec<UserAccount> = load(storage.store.as_ref(), USERS_KEY, Vec::new());
    if users.iter().any(|u| u.email.eq_ignore_ascii_case(&email)) {
        println!("[registerUser] Rejected - email already registered");
        return Err("Email already registered. Please use a different email or login.".to_string());
    }

    let account = UserAccount {
        id: newId(),
        name,
        email,
        password,
        createdAt: now(),
    };
    let current = CurrentUser::from(&account);

    users.push(account);
    save(storage.store.as_ref(), USERS_KEY, &users);
    save(storage.store.as_ref(), CURRENT_USER_KEY, &current);

    println!("[registerUser] SUCCESS - registered user id: {}", current.id);
    Ok(current)
}

pub fn loginUser(storage: &StorageState, email: &str, password: &str) -> Result<CurrentUser, String> {
    println!("[loginUser] Called with email: {:?}", email);

    let users: Vec<UserAccount> = load(storage.store.as_ref(), USERS_KEY, Vec::new());
    let account = users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
        .ok_or("Invalid email or password")?;

    let current = CurrentUser::from(account);
    save(storage.store.as_ref(), CURRENT_USER_KEY, &current);

    println!("[loginUser] SUCCESS");
    Ok(current)
}

pub fn getCurrentUser(storage: &StorageState) -> Option<CurrentUser> {
    load(storage.store.as_ref(), CURRENT_USER_KEY, None)
}

pub fn signOut(storage: &StorageState) {
    println!("[signOut] Called");
    save(storage.store.as_ref(), CURRENT_USER_KEY, &None::<CurrentUser>);
}
