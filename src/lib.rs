//! # Agromart SDK
//!
//! A Rust client SDK for the Agromart agricultural e-commerce REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — wire types, the response envelope, errors
//! 2. **HTTP facade** — `AgromartHttp`: base URL, cookies, envelope unwrapping
//! 3. **Resource catalogues** — one typed sub-client per backend resource
//! 4. **State containers** — `SessionStore` and `CartStore`, mirroring server
//!    state for UI binding
//! 5. **Route guard** — pure navigation decisions from the session snapshot
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use agromart_sdk::prelude::*;
//!
//! let client = AgromartClient::builder()
//!     .base_url("https://shop.example.com")
//!     .build()?;
//!
//! let session = SessionStore::new(client.clone());
//! let cart = CartStore::new(client.clone(), session.epoch());
//!
//! session.login(&LoginRequest {
//!     username: "alice".into(),
//!     password: "secret".into(),
//! })
//! .await?;
//! cart.fetch().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): wire types, sub-clients, state.
pub mod domain;

/// The `{code, message, data}` response envelope and its unwrap rule.
pub mod envelope;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP facade ─────────────────────────────────────────────────────

/// HTTP client facade with envelope unwrapping.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `AgromartClient` — the primary entry point.
pub mod client;

// ── Layer 4: Route guard ─────────────────────────────────────────────────────

/// Navigation decisions from the session snapshot.
pub mod guard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Page, Role};

    // Envelope
    pub use crate::envelope::Envelope;

    // Domain types — auth + user
    pub use crate::domain::auth::{LoginRequest, RegisterRequest, UserInfo};
    pub use crate::domain::user::{Address, CreateAddressRequest, Profile, UpdateProfileRequest};

    // Domain types — cart
    pub use crate::domain::cart::{AddItemRequest, CartDetail, CartItem, ShopCart, UpdateItemRequest};

    // Domain types — orders
    pub use crate::domain::orders::{
        CreateOrderRequest, OrderDetail, OrderItem, OrderSummary, PaginationQuery, ShipRequest,
        ShopOrderDetail, ShopOrderSummary,
    };

    // Domain types — products
    pub use crate::domain::products::{
        CreateProductRequest, ProductDetail, ProductQuery, ProductSummary, SearchQuery,
        UpdateProductRequest,
    };

    // Domain types — shop
    pub use crate::domain::shop::{
        CreateShopRequest, PublicShopDetail, PublicShopSummary, ShopDetail, ShopListQuery,
        ShopStatus, UpdateShopRequest,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{
        AdminClient, AgromartClient, AgromartClientBuilder, AuthClient, CartClient, OrdersClient,
        ProductsClient, ShopsClient, SystemClient, UsersClient,
    };

    // State containers
    pub use crate::domain::auth::state::{SessionEpoch, SessionStore};
    pub use crate::domain::cart::state::CartStore;

    // Route guard
    pub use crate::guard::RouteDecision;
}
