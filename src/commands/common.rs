// Common helpers for commands
// All using camelCase for direct JSON compatibility

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Get current timestamp in milliseconds
pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

/// Generate new UUID
pub fn newId() -> String {
    Uuid::new_v4().to_string()
}

/// Trim user input, returning None when it collapses to empty
pub fn nonEmpty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims_and_rejects_whitespace() {
        assert_eq!(nonEmpty("  Buy milk  "), Some("Buy milk".to_string()));
        assert_eq!(nonEmpty("   "), None);
        assert_eq!(nonEmpty(""), None);
    }
}
