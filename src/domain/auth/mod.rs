//! Authentication — credentials, identity, session state.
//!
//! Auth is cookie-based: a successful login sets an HTTP-only session cookie
//! that the facade's cookie store replays on every later call. The SDK never
//! sees or stores a token.

pub mod client;
pub mod state;

use serde::{Deserialize, Serialize};

use crate::shared::Role;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request body. Same shape as login by backend design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// The authenticated identity returned by login, register and `me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub roles: Vec<Role>,
}

impl UserInfo {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
