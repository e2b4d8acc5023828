/// Server error types
use thiserror::Error;
use tonic::Status;
use userhub_core::RegistryError;
use userhub_proto::USER_NOT_FOUND;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

impl From<ServerError> for Status {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::Registry(RegistryError::NotFound(_)) => Status::not_found(USER_NOT_FOUND),
            ServerError::Registry(RegistryError::DuplicateId(ref id)) => {
                tracing::error!("Duplicate user id generated: {}", id);
                Status::already_exists(err.to_string())
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                Status::internal("Configuration error")
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                Status::internal("IO error")
            }
            ServerError::Transport(ref e) => {
                tracing::error!("Transport error: {:?}", e);
                Status::internal("Transport error")
            }
        }
    }
}
