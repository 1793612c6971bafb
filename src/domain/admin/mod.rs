//! Platform administration — shop review workflow.
//!
//! Reuses the shop domain's types; admin only changes review status.

pub mod client;
