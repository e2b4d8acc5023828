//! User registry operations
//!
//! The registry is the only component that creates identifiers and
//! timestamps. Every mutating operation holds the store's write guard from
//! lookup to mutation and never awaits anything else in between, so
//! concurrent calls are applied one after another.

use crate::error::{RegistryError, Result};
use crate::store::UserStore;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use chrono::Utc;
use tracing::{debug, info};

/// The four registry operations over a [`UserStore`]
#[derive(Debug, Default)]
pub struct UserRegistry {
    store: UserStore,
}

impl UserRegistry {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Underlying record store
    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// All users in store order
    pub async fn get_users(&self) -> Vec<User> {
        let users = self.store.snapshot().await;
        debug!(count = users.len(), "Listed users");
        users
    }

    /// Create a user with a fresh id and the current time.
    ///
    /// `status` defaults to "active" when absent or empty.
    pub async fn add_user(&self, input: CreateUser) -> Result<User> {
        let user = User {
            id: UserId::generate(),
            status: input.effective_status(),
            name: input.name,
            email: input.email,
            created_at: Utc::now().timestamp_millis(),
        };

        self.store.write().await.append(user.clone())?;

        info!(id = %user.id, name = %user.name, email = %user.email, status = %user.status, "User added");
        Ok(user)
    }

    /// Merge the supplied non-empty fields into an existing user
    pub async fn update_user(&self, changes: UpdateUser) -> Result<User> {
        let mut records = self.store.write().await;

        let index = records
            .find_index(&changes.id)
            .ok_or_else(|| RegistryError::NotFound(changes.id.clone()))?;

        // `index` was found under this guard, so the slot exists
        let updated = records.list()[index].merged(&changes);
        let previous = records.replace_at(index, updated.clone());
        debug_assert!(previous.is_some());
        drop(records);

        info!(id = %updated.id, name = %updated.name, email = %updated.email, status = %updated.status, "User updated");
        Ok(updated)
    }

    /// Permanently remove a user
    pub async fn delete_user(&self, id: &UserId) -> Result<()> {
        let mut records = self.store.write().await;

        let index = records
            .find_index(id)
            .ok_or_else(|| RegistryError::not_found(id.clone()))?;
        let removed = records.remove_at(index);
        debug_assert!(removed.is_some());
        drop(records);

        info!(id = %id, "User deleted");
        Ok(())
    }
}
