//! In-memory record store
//!
//! [`Records`] is the plain ordered sequence of users with its mutation
//! primitives. [`UserStore`] owns it behind a single `RwLock`, which is the
//! only way to reach the records: readers share the lock, any mutation takes
//! it exclusively. An operation that needs to look a record up and then
//! change it must do both under one write guard.

use crate::error::{RegistryError, Result};
use crate::types::{User, UserId};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered user records, insertion order preserved
#[derive(Debug, Default, Clone)]
pub struct Records {
    users: Vec<User>,
}

impl Records {
    /// Full current sequence in store order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Add a record at the end.
    ///
    /// Fails with [`RegistryError::DuplicateId`] if the id is already stored.
    pub fn append(&mut self, user: User) -> Result<()> {
        if self.find_index(&user.id).is_some() {
            return Err(RegistryError::DuplicateId(user.id));
        }
        self.users.push(user);
        Ok(())
    }

    /// Position of the record with this id, if any
    pub fn find_index(&self, id: &UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == *id)
    }

    /// Overwrite the record at `index`, returning the previous one.
    ///
    /// The replacement must keep the id of the record it replaces.
    /// Returns `None` when `index` is out of range.
    pub fn replace_at(&mut self, index: usize, user: User) -> Option<User> {
        let slot = self.users.get_mut(index)?;
        debug_assert_eq!(slot.id, user.id);
        Some(std::mem::replace(slot, user))
    }

    /// Remove the record at `index`, shifting later records down.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<User> {
        (index < self.users.len()).then(|| self.users.remove(index))
    }
}

/// Lock-guarded owner of the user records
#[derive(Debug, Default)]
pub struct UserStore {
    records: RwLock<Records>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `users`, in the given order
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Result<Self> {
        let mut records = Records::default();
        for user in users {
            records.append(user)?;
        }
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Shared access; concurrent with other readers, never with a writer
    pub async fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().await
    }

    /// Exclusive access for a complete read-then-write operation
    pub async fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().await
    }

    /// Consistent copy of every record
    pub async fn snapshot(&self) -> Vec<User> {
        self.read().await.list().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User::new(id, format!("User {id}"), format!("{id}@example.com"), "active", 0)
    }

    fn ids(records: &Records) -> Vec<&str> {
        records.list().iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut records = Records::default();
        records.append(user("b")).unwrap();
        records.append(user("a")).unwrap();
        records.append(user("c")).unwrap();
        assert_eq!(ids(&records), ["b", "a", "c"]);
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut records = Records::default();
        records.append(user("1")).unwrap();

        let err = records.append(user("1")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId(UserId::new("1")));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_find_index() {
        let mut records = Records::default();
        records.append(user("1")).unwrap();
        records.append(user("2")).unwrap();

        assert_eq!(records.find_index(&UserId::new("2")), Some(1));
        assert_eq!(records.find_index(&UserId::new("3")), None);
    }

    #[test]
    fn test_replace_at_preserves_position() {
        let mut records = Records::default();
        for id in ["1", "2", "3"] {
            records.append(user(id)).unwrap();
        }

        let mut renamed = user("2");
        renamed.name = "Renamed".to_string();
        let previous = records.replace_at(1, renamed).unwrap();

        assert_eq!(previous.name, "User 2");
        assert_eq!(ids(&records), ["1", "2", "3"]);
        assert_eq!(records.list()[1].name, "Renamed");
        assert!(records.replace_at(9, user("9")).is_none());
    }

    #[test]
    fn test_remove_at_shifts_without_gaps() {
        let mut records = Records::default();
        for id in ["1", "2", "3"] {
            records.append(user(id)).unwrap();
        }

        let removed = records.remove_at(0).unwrap();
        assert_eq!(removed.id, UserId::new("1"));
        assert_eq!(ids(&records), ["2", "3"]);
        assert_eq!(records.find_index(&UserId::new("3")), Some(1));
        assert!(records.remove_at(2).is_none());
    }

    #[test]
    fn test_with_users_rejects_duplicates() {
        let result = UserStore::with_users(vec![user("1"), user("1")]);
        assert!(matches!(result, Err(RegistryError::DuplicateId(_))));
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let store = UserStore::with_users(vec![user("1")]).unwrap();
        let snapshot = store.snapshot().await;

        store.write().await.append(user("2")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len().await, 2);
    }
}
