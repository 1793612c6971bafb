//! System endpoints — health and connectivity probes.

pub mod client;
