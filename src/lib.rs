//! tinyweb - minimal short-connection HTTP responder
//!
//! Core library: growable receive buffer, per-connection framing, routing.

pub mod buffer;
pub mod config;
pub mod http;
pub mod router;
pub mod server;
