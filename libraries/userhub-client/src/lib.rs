//! UserHub Client
//!
//! gRPC client library for the UserHub registry server, and the restricted
//! bridge a UI process talks to.
//!
//! # Features
//!
//! - **Typed client**: `UserHubClient` maps wire messages to `userhub-core` types
//! - **UI bridge**: `UserBridge` exposes only `get_users`, `add_user`,
//!   `update_user` and `delete_user`, with serializable errors
//!
//! # Example
//!
//! ```ignore
//! use userhub_client::{ClientConfig, UserBridge, UserData};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bridge = UserBridge::new(ClientConfig::default())?;
//!
//!     let created = bridge
//!         .add_user(UserData {
//!             name: Some("Ann".into()),
//!             email: Some("ann@x.com".into()),
//!             ..UserData::default()
//!         })
//!         .await?;
//!     println!("Created {} ({})", created.name, created.id);
//!
//!     for user in bridge.get_users().await? {
//!         println!("{} - {}", user.id, user.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod bridge;
mod client;
mod error;
mod types;

pub use bridge::{BridgeError, UserBridge};
pub use client::UserHubClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, UserData, DEFAULT_ENDPOINT};
