//! Configuration and request payload types.

use serde::{Deserialize, Serialize};
use userhub_core::{CreateUser, UpdateUser, UserId};

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:50051";

/// Configuration for connecting to a UserHub server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server URL (e.g., "http://localhost:50051")
    pub endpoint: String,
}

impl ClientConfig {
    /// Create a new client config for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// User payload as sent by a UI through the bridge.
///
/// Every field is optional; missing and empty values are handled by the
/// registry's defaulting and merge rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

impl From<UserData> for CreateUser {
    fn from(data: UserData) -> Self {
        Self {
            name: data.name.unwrap_or_default(),
            email: data.email.unwrap_or_default(),
            status: data.status,
        }
    }
}

impl From<UserData> for UpdateUser {
    fn from(data: UserData) -> Self {
        Self {
            id: UserId::new(data.id.unwrap_or_default()),
            name: data.name,
            email: data.email,
            status: data.status,
        }
    }
}
