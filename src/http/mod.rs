//! HTTP facade over the backend's enveloped REST API.

pub mod client;

pub use client::AgromartHttp;
