//! Network helpers for talking to the portal API.

pub mod api;
