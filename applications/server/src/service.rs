//! gRPC handlers for `user.UserService`
//!
//! Each handler converts the wire message into a domain request, runs the
//! registry operation and converts the outcome back. Registry errors go
//! through [`ServerError`] so unknown ids surface as `NOT_FOUND`.

use crate::error::ServerError;
use crate::state::AppState;
use tonic::{Request, Response, Status};
use tracing::debug;
use userhub_core::UserId as DomainUserId;
use userhub_proto::user_service_server::{UserService, UserServiceServer};
use userhub_proto::{Empty, User, UserId, UserInput, UserList};

#[derive(Debug, Clone)]
pub struct RegistryService {
    state: AppState,
}

impl RegistryService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Wrap the service for registration on a tonic router
    pub fn into_server(self) -> UserServiceServer<Self> {
        UserServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl UserService for RegistryService {
    async fn get_users(&self, request: Request<Empty>) -> Result<Response<UserList>, Status> {
        debug!(remote = ?request.remote_addr(), "GetUsers called");

        let users = self.state.registry.get_users().await;
        Ok(Response::new(UserList {
            users: users.into_iter().map(User::from).collect(),
        }))
    }

    async fn add_user(&self, request: Request<UserInput>) -> Result<Response<User>, Status> {
        debug!(remote = ?request.remote_addr(), "AddUser called");

        let created = self
            .state
            .registry
            .add_user(request.into_inner().into())
            .await
            .map_err(ServerError::from)?;
        Ok(Response::new(created.into()))
    }

    async fn update_user(&self, request: Request<UserInput>) -> Result<Response<User>, Status> {
        debug!(remote = ?request.remote_addr(), "UpdateUser called");

        let updated = self
            .state
            .registry
            .update_user(request.into_inner().into())
            .await
            .map_err(ServerError::from)?;
        Ok(Response::new(updated.into()))
    }

    async fn delete_user(&self, request: Request<UserId>) -> Result<Response<Empty>, Status> {
        debug!(remote = ?request.remote_addr(), "DeleteUser called");

        let id = DomainUserId::from(request.into_inner());
        self.state
            .registry
            .delete_user(&id)
            .await
            .map_err(ServerError::from)?;
        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use tonic::Code;

    fn seeded_service() -> RegistryService {
        RegistryService::new(AppState::from_config(&ServerConfig::default()).unwrap())
    }

    fn input(id: &str, name: &str, email: &str, status: &str) -> UserInput {
        UserInput {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            status: status.to_string(),
        }
    }

    async fn list_ids(service: &RegistryService) -> Vec<String> {
        service
            .get_users(Request::new(Empty {}))
            .await
            .unwrap()
            .into_inner()
            .users
            .into_iter()
            .map(|u| u.id)
            .collect()
    }

    #[tokio::test]
    async fn test_add_user_scenario() {
        let service = seeded_service();

        let created = service
            .add_user(Request::new(input("", "Ann", "ann@x.com", "")))
            .await
            .unwrap()
            .into_inner();

        assert!(!created.id.is_empty());
        assert_ne!(created.id, "1");
        assert_ne!(created.id, "2");
        assert_eq!(created.status, "active");
        assert!(created.created_at > 0);
        assert_eq!(list_ids(&service).await, ["1", "2", created.id.as_str()]);
    }

    #[tokio::test]
    async fn test_add_user_ignores_client_supplied_id() {
        let service = seeded_service();
        let created = service
            .add_user(Request::new(input("1", "Dup", "dup@x.com", "")))
            .await
            .unwrap()
            .into_inner();

        assert_ne!(created.id, "1");
        assert_eq!(list_ids(&service).await.len(), 3);
    }

    #[tokio::test]
    async fn test_update_user_merges_non_empty_fields() {
        let service = seeded_service();
        let updated = service
            .update_user(Request::new(input("2", "", "jane@new.com", "")))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Jane Smith");
        assert_eq!(updated.email, "jane@new.com");
        assert_eq!(updated.status, "active");
    }

    #[tokio::test]
    async fn test_update_unknown_user_returns_not_found() {
        let service = seeded_service();
        let status = service
            .update_user(Request::new(input("nope", "X", "", "")))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "User not found");
        assert_eq!(list_ids(&service).await, ["1", "2"]);
    }

    #[tokio::test]
    async fn test_delete_user() {
        let service = seeded_service();
        service
            .delete_user(Request::new(UserId { id: "1".to_string() }))
            .await
            .unwrap();
        assert_eq!(list_ids(&service).await, ["2"]);

        let status = service
            .delete_user(Request::new(UserId { id: "1".to_string() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(list_ids(&service).await, ["2"]);
    }
}
