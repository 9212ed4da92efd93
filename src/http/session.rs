//! Per-connection framing.
//!
//! A [`FramingSession`] accumulates inbound chunks until the header boundary
//! shows up, turns the request line into exactly one response and then only
//! ever asks to close. It does no socket I/O itself: each event returns a
//! [`Step`] telling the connection driver what to do next, and the one
//! response is produced by [`FramingSession::respond`], which may await a
//! static file read.

use std::sync::Arc;

use bytes::Bytes;

use crate::buffer::DynamicBuffer;
use crate::http::parser::{find_header_boundary, parse_request_line, ParseError};
use crate::http::request::Request;
use crate::http::writer::serialize_response;
use crate::router::Router;

/// Accumulator size a session starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub initial_buffer_capacity: usize,
    /// Close without a response once this many bytes arrive with no boundary.
    /// `None` lets the accumulator grow without limit.
    pub max_request_bytes: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_buffer_capacity: DEFAULT_INITIAL_CAPACITY,
            max_request_bytes: None,
        }
    }
}

/// Lifecycle of a session. The terminal state is the session being consumed
/// by [`FramingSession::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Awaiting bytes or the boundary
    Reading,
    /// Request parsed; response being produced or written
    Dispatched,
    /// Waiting for the connection to finish closing
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// One response written
    Responded,
    /// The response write failed; the connection closes all the same
    WriteFailed,
    /// Request line did not start with the recognized method
    UnsupportedMethod,
    /// End of stream before the header boundary
    PeerClosed,
    /// Read error before the header boundary
    ReadFailed,
    /// Accumulator passed the configured limit without a boundary
    RequestTooLarge,
}

/// What the driver must do after feeding an event to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading.
    NeedMore,
    /// Request parsed: call [`FramingSession::respond`], write the bytes,
    /// then report through [`FramingSession::on_write_complete`].
    Dispatch,
    /// Close the connection without writing anything (more).
    Close,
}

pub struct FramingSession {
    buffer: DynamicBuffer,
    state: SessionState,
    router: Arc<Router>,
    max_request_bytes: Option<usize>,
    pending: Option<Request>,
    close_reason: Option<CloseReason>,
}

impl FramingSession {
    pub fn new(router: Arc<Router>, config: &SessionConfig) -> Self {
        Self {
            buffer: DynamicBuffer::with_capacity(config.initial_buffer_capacity),
            state: SessionState::Reading,
            router,
            max_request_bytes: config.max_request_bytes,
            pending: None,
            close_reason: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close_reason
    }

    /// Bytes accumulated so far.
    pub fn buffered(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Feeds one inbound chunk.
    ///
    /// The boundary may straddle any number of chunks, so the whole
    /// accumulator is searched every time. Outside `Reading` the chunk is
    /// discarded and the session asks to close.
    pub fn on_read(&mut self, chunk: &[u8]) -> Step {
        if self.state != SessionState::Reading {
            return Step::Close;
        }

        self.buffer.append(chunk);

        let Some(boundary) = find_header_boundary(self.buffer.as_slice()) else {
            return match self.max_request_bytes {
                Some(limit) if self.buffer.len() > limit => {
                    tracing::warn!(
                        buffered = self.buffer.len(),
                        limit,
                        "Request head exceeds limit"
                    );
                    self.close(CloseReason::RequestTooLarge)
                }
                _ => Step::NeedMore,
            };
        };

        let head = &self.buffer.as_slice()[..boundary];
        tracing::debug!(head = %String::from_utf8_lossy(head), "Request head received");

        match parse_request_line(head) {
            Ok(request) => {
                self.state = SessionState::Dispatched;
                self.pending = Some(request);
                Step::Dispatch
            }
            Err(ParseError::UnsupportedMethod) => {
                tracing::debug!("Unsupported method, closing without response");
                self.close(CloseReason::UnsupportedMethod)
            }
        }
    }

    /// Routes the dispatched request and formats the wire response.
    ///
    /// Yields bytes exactly once per session; `None` before dispatch and on
    /// every later call.
    pub async fn respond(&mut self) -> Option<Bytes> {
        let request = self.pending.take()?;
        let response = self.router.route(&request.path, &request.query).await;

        tracing::info!(
            method = request.method.as_str(),
            path = %request.path,
            query = %request.query,
            status = response.status.as_u16(),
            bytes = response.content_length,
            "Request dispatched"
        );

        Some(serialize_response(&response))
    }

    /// End of stream from the peer.
    pub fn on_eof(&mut self) -> Step {
        if self.state == SessionState::Reading {
            tracing::debug!(buffered = self.buffer.len(), "Peer closed before request completed");
            return self.close(CloseReason::PeerClosed);
        }
        Step::Close
    }

    /// Read failure from the peer.
    pub fn on_read_error(&mut self, error: &std::io::Error) -> Step {
        if self.state == SessionState::Reading {
            tracing::debug!(error = %error, "Read failed before request completed");
            return self.close(CloseReason::ReadFailed);
        }
        Step::Close
    }

    /// Completion of the one response write. Success and failure both lead to close.
    pub fn on_write_complete(&mut self, result: std::io::Result<()>) {
        if self.state != SessionState::Dispatched {
            return;
        }

        let reason = match result {
            Ok(()) => CloseReason::Responded,
            Err(e) => {
                tracing::debug!(error = %e, "Response write failed");
                CloseReason::WriteFailed
            }
        };
        self.close(reason);
    }

    /// Called once the connection handle has closed. Releases the accumulator.
    pub fn finish(self) -> CloseReason {
        let reason = self.close_reason.unwrap_or(CloseReason::PeerClosed);
        tracing::debug!(?reason, buffered = self.buffer.len(), "Session released");
        reason
    }

    fn close(&mut self, reason: CloseReason) -> Step {
        self.state = SessionState::Closing;
        self.close_reason.get_or_insert(reason);
        Step::Close
    }
}
