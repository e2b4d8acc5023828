//! Typed gRPC client for the UserHub server.

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;
use userhub_core::{CreateUser, UpdateUser, User, UserId};
use userhub_proto::user_service_client::UserServiceClient;
use userhub_proto::{Empty, UserInput};

/// Client for the four registry operations.
///
/// Cloning is cheap; clones share the underlying channel.
#[derive(Debug, Clone)]
pub struct UserHubClient {
    inner: UserServiceClient<Channel>,
    endpoint: String,
}

impl UserHubClient {
    /// Create a client that connects on first use.
    ///
    /// Must be called from within a Tokio runtime. An unreachable server is
    /// reported by the first call rather than here.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = normalize_endpoint(&config.endpoint)?;
        let channel = build_endpoint(&endpoint)?.connect_lazy();

        Ok(Self {
            inner: UserServiceClient::new(channel),
            endpoint,
        })
    }

    /// Create a client and establish the connection immediately.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let endpoint = normalize_endpoint(&config.endpoint)?;
        let channel = build_endpoint(&endpoint)?.connect().await?;

        debug!(endpoint = %endpoint, "Connected to server");
        Ok(Self {
            inner: UserServiceClient::new(channel),
            endpoint,
        })
    }

    /// Get the server endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch every user in store order.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let response = self.inner.clone().get_users(Empty {}).await?;
        Ok(response
            .into_inner()
            .users
            .into_iter()
            .map(User::from)
            .collect())
    }

    /// Create a user; the server assigns its id and timestamp.
    pub async fn add_user(&self, user: CreateUser) -> Result<User> {
        let response = self.inner.clone().add_user(UserInput::from(user)).await?;
        Ok(response.into_inner().into())
    }

    /// Apply the supplied fields to an existing user.
    pub async fn update_user(&self, changes: UpdateUser) -> Result<User> {
        let response = self
            .inner
            .clone()
            .update_user(UserInput::from(changes))
            .await?;
        Ok(response.into_inner().into())
    }

    /// Remove a user.
    pub async fn delete_user(&self, id: &UserId) -> Result<()> {
        self.inner
            .clone()
            .delete_user(userhub_proto::UserId::from(id.clone()))
            .await?;
        Ok(())
    }
}

fn normalize_endpoint(endpoint: &str) -> Result<String> {
    if endpoint.is_empty() {
        return Err(ClientError::InvalidEndpoint(
            "Endpoint cannot be empty".into(),
        ));
    }

    let endpoint = endpoint.trim_end_matches('/').to_string();
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(ClientError::InvalidEndpoint(
            "Endpoint must start with http:// or https://".into(),
        ));
    }

    Ok(endpoint)
}

fn build_endpoint(endpoint: &str) -> Result<Endpoint> {
    Ok(Endpoint::from_shared(endpoint.to_string())
        .map_err(|e| ClientError::InvalidEndpoint(e.to_string()))?
        .connect_timeout(Duration::from_secs(10)))
}
