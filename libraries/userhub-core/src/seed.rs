//! Demo records a fresh registry can start with

use crate::types::{User, DEFAULT_STATUS};

/// The two demo users, stamped with `created_at`
pub fn demo_users(created_at: i64) -> Vec<User> {
    vec![
        User::new("1", "John Doe", "john@example.com", DEFAULT_STATUS, created_at),
        User::new("2", "Jane Smith", "jane@example.com", DEFAULT_STATUS, created_at),
    ]
}
