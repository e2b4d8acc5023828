//! Restricted surface handed to a UI process.
//!
//! A UI gets a [`UserBridge`] and nothing else: four one-shot calls whose
//! results and errors are plain serializable values. The gRPC client stays
//! private to the bridge.

use crate::client::UserHubClient;
use crate::error::ClientError;
use crate::types::{ClientConfig, UserData};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;
use userhub_core::{User, UserId};

/// Failure reported to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeError {
    /// Machine-readable kind, e.g. "not_found" or "unavailable"
    pub code: String,
    /// Human-readable detail, as reported by the server where available
    pub message: String,
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for BridgeError {}

impl From<ClientError> for BridgeError {
    fn from(err: ClientError) -> Self {
        let message = match &err {
            ClientError::NotFound(message)
            | ClientError::Unavailable(message)
            | ClientError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self {
            code: err.kind().to_string(),
            message,
        }
    }
}

/// The only crossing point between a UI and the registry server
pub struct UserBridge {
    client: UserHubClient,
}

impl UserBridge {
    /// Create a bridge to the server at `config.endpoint`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: ClientConfig) -> Result<Self, BridgeError> {
        Ok(Self::from_client(UserHubClient::new(config)?))
    }

    pub fn from_client(client: UserHubClient) -> Self {
        Self { client }
    }

    pub async fn get_users(&self) -> Result<Vec<User>, BridgeError> {
        self.client.get_users().await.map_err(|e| {
            error!("Error getting users: {}", e);
            e.into()
        })
    }

    pub async fn add_user(&self, user_data: UserData) -> Result<User, BridgeError> {
        self.client.add_user(user_data.into()).await.map_err(|e| {
            error!("Error adding user: {}", e);
            e.into()
        })
    }

    pub async fn update_user(&self, user_data: UserData) -> Result<User, BridgeError> {
        self.client.update_user(user_data.into()).await.map_err(|e| {
            error!("Error updating user: {}", e);
            e.into()
        })
    }

    pub async fn delete_user(&self, user_id: impl Into<String>) -> Result<(), BridgeError> {
        let id = UserId::new(user_id);
        self.client.delete_user(&id).await.map_err(|e| {
            error!("Error deleting user: {}", e);
            e.into()
        })
    }
}

impl fmt::Debug for UserBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserBridge")
            .field("endpoint", &self.client.endpoint())
            .finish()
    }
}
