//! Listening socket and per-connection task spawning.

pub mod context;
pub mod listener;

pub use context::ServerContext;
