//! HTTP transport layer for the vehicle catalog
//!
//! Handlers plus the shared JSON response envelope.

pub mod handlers;
pub mod response;
