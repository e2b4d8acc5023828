//! UserHub Server Library
//!
//! gRPC user registry server: configuration, the `user.UserService`
//! handlers, the HTTP health endpoint and the serve loop.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod service;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use server::Listeners;
pub use service::RegistryService;
pub use state::AppState;
