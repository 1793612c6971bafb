//! High-level client — `AgromartClient` with nested sub-client accessors.
//!
//! Each resource area has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::admin::client::Admin;
use crate::domain::auth::client::Auth;
use crate::domain::cart::client::Cart;
use crate::domain::orders::client::Orders;
use crate::domain::products::client::Products;
use crate::domain::shop::client::Shops;
use crate::domain::system::client::System;
use crate::domain::user::client::Users;
use crate::error::SdkError;
use crate::http::AgromartHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::admin::client::Admin as AdminClient;
pub use crate::domain::auth::client::Auth as AuthClient;
pub use crate::domain::cart::client::Cart as CartClient;
pub use crate::domain::orders::client::Orders as OrdersClient;
pub use crate::domain::products::client::Products as ProductsClient;
pub use crate::domain::shop::client::Shops as ShopsClient;
pub use crate::domain::system::client::System as SystemClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the Agromart SDK.
///
/// Provides nested sub-client accessors for each resource area:
/// `client.products()`, `client.cart()`, etc. Cloning is cheap and all
/// clones share one cookie store, so a login on any handle covers all.
#[derive(Clone)]
pub struct AgromartClient {
    pub(crate) http: AgromartHttp,
}

impl AgromartClient {
    pub fn builder() -> AgromartClientBuilder {
        AgromartClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn cart(&self) -> Cart<'_> {
        Cart { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn shops(&self) -> Shops<'_> {
        Shops { client: self }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    pub fn system(&self) -> System<'_> {
        System { client: self }
    }

    /// The configured REST base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AgromartClientBuilder {
    base_url: String,
}

impl Default for AgromartClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl AgromartClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<AgromartClient, SdkError> {
        Ok(AgromartClient {
            http: AgromartHttp::new(&self.base_url),
        })
    }
}
