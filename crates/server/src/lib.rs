//! HTTP surface for the vodhound catalog service.

pub mod api;
pub mod metrics;
pub mod state;
