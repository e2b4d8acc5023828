//! UserHub Core
//!
//! Platform-agnostic domain types, record store and registry logic for the
//! UserHub user registry.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `UpdateUser`, `UserId`
//! - **Record Store**: `UserStore`, the single lock-guarded sequence of users
//! - **Registry**: `UserRegistry`, the four registry operations atop the store
//! - **Error Handling**: `RegistryError` and `Result`
//!
//! Transport concerns (protobuf, gRPC) live in `userhub-proto` and the server.
//!
//! # Example
//!
//! ```rust
//! use userhub_core::{CreateUser, UserRegistry, UserStore};
//!
//! # async fn example() -> userhub_core::Result<()> {
//! let registry = UserRegistry::new(UserStore::new());
//!
//! let user = registry
//!     .add_user(CreateUser::new("Ann", "ann@x.com"))
//!     .await?;
//! assert_eq!(user.status, "active");
//!
//! let users = registry.get_users().await;
//! assert_eq!(users.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{RegistryError, Result};
pub use registry::UserRegistry;
pub use store::{Records, UserStore};
pub use types::{CreateUser, UpdateUser, User, UserId, DEFAULT_STATUS};
