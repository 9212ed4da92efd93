//! HTTP protocol handling.
//!
//! The server answers exactly one request per connection and then closes it.
//!
//! # Architecture
//!
//! - **`session`**: sans-IO framing state machine owning the receive accumulator
//! - **`connection`**: drives a session over an async stream
//! - **`parser`**: header boundary search and request-line extraction
//! - **`request`**: recognized method and the parsed request target
//! - **`response`**: status codes and the response descriptor
//! - **`writer`**: wire formatting and the single response write
//! - **`mime`**: content type lookup by file extension
//!
//! # Session State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate chunks, rescan for \r\n\r\n
//!        └──┬───────┬──┘
//!   boundary│       │ EOF / read error / unsupported method
//!           ▼       │
//!   ┌──────────────┐│
//!   │  Dispatched  ││ ← Route (may await a file read), write once
//!   └──────┬───────┘│
//!          │ write done (ok or not)
//!          ▼        ▼
//!        ┌─────────────┐
//!        │   Closing   │ ← Shut the stream down, then release the session
//!        └─────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tinyweb::http::connection::Connection;
//! use tinyweb::http::session::{FramingSession, SessionConfig};
//! use tinyweb::router::Router;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let router = Arc::new(Router::new(None));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let session = FramingSession::new(router.clone(), &SessionConfig::default());
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, session).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod session;
pub mod writer;
