/// User domain type
use super::UserId;
use serde::{Deserialize, Serialize};

/// Status given to users created without one
pub const DEFAULT_STATUS: &str = "active";

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, immutable after creation
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address (not validated)
    pub email: String,

    /// Lifecycle tag, conventionally "active" or "inactive"
    pub status: String,

    /// Creation timestamp in milliseconds since the Unix epoch
    pub created_at: i64,
}

impl User {
    /// Build a user record with an explicit id and timestamp
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        status: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            status: status.into(),
            created_at,
        }
    }

    /// Return a copy of this record with the supplied changes applied.
    ///
    /// Only `name`, `email` and `status` are touched, and only when the
    /// change carries a non-empty value. `id` and `created_at` are kept.
    pub fn merged(&self, changes: &UpdateUser) -> Self {
        Self {
            id: self.id.clone(),
            name: pick(changes.name.as_deref(), &self.name),
            email: pick(changes.email.as_deref(), &self.email),
            status: pick(changes.status.as_deref(), &self.status),
            created_at: self.created_at,
        }
    }
}

/// Input for creating a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// Falls back to [`DEFAULT_STATUS`] when absent or empty
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Status the new record will carry
    pub fn effective_status(&self) -> String {
        supplied(self.status.as_deref()).unwrap_or(DEFAULT_STATUS).to_string()
    }
}

/// Partial update of an existing user
///
/// An empty string is treated the same as an omitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            status: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn pick(change: Option<&str>, current: &str) -> String {
    supplied(change).unwrap_or(current).to_string()
}
