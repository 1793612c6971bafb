//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — request/response types matching the backend wire format
//! - `client.rs` — that resource's endpoint catalogue, delegating to the HTTP facade
//! - `state.rs` — server-synchronized state container (where the resource has one)

pub mod admin;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;
pub mod shop;
pub mod system;
pub mod user;
