//! UserHub Protocol
//!
//! Generated protobuf messages and gRPC service bindings for `user.UserService`
//! (see `proto/user.proto`), plus conversions between the wire messages and the
//! domain types in `userhub-core`.
//!
//! Proto3 strings have no "unset" state, so an empty string on the wire maps to
//! `None` on the domain side and `None` maps back to an empty string.

mod pb {
    #![allow(clippy::all, clippy::pedantic, missing_docs)]
    tonic::include_proto!("user");
}

pub use pb::*;

use userhub_core as domain;

/// gRPC detail string for lookups of an unknown id
pub const USER_NOT_FOUND: &str = "User not found";

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl From<domain::User> for User {
    fn from(user: domain::User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name,
            email: user.email,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

impl From<User> for domain::User {
    fn from(user: User) -> Self {
        domain::User::new(user.id, user.name, user.email, user.status, user.created_at)
    }
}

impl From<UserInput> for domain::CreateUser {
    fn from(input: UserInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            status: non_empty(input.status),
        }
    }
}

impl From<UserInput> for domain::UpdateUser {
    fn from(input: UserInput) -> Self {
        Self {
            id: domain::UserId::new(input.id),
            name: non_empty(input.name),
            email: non_empty(input.email),
            status: non_empty(input.status),
        }
    }
}

impl From<domain::CreateUser> for UserInput {
    fn from(input: domain::CreateUser) -> Self {
        Self {
            id: String::new(),
            name: input.name,
            email: input.email,
            status: input.status.unwrap_or_default(),
        }
    }
}

impl From<domain::UpdateUser> for UserInput {
    fn from(changes: domain::UpdateUser) -> Self {
        Self {
            id: changes.id.into_inner(),
            name: changes.name.unwrap_or_default(),
            email: changes.email.unwrap_or_default(),
            status: changes.status.unwrap_or_default(),
        }
    }
}

impl From<domain::UserId> for UserId {
    fn from(id: domain::UserId) -> Self {
        Self { id: id.into_inner() }
    }
}

impl From<UserId> for domain::UserId {
    fn from(id: UserId) -> Self {
        domain::UserId::new(id.id)
    }
}
