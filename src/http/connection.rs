use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::session::{CloseReason, FramingSession, Step};
use crate::http::writer::ResponseWriter;

/// Read size per call, as suggested by libuv-style reactors.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 64 * 1024;

/// Drives one [`FramingSession`] over a stream: read until the session
/// responds or gives up, write at most once, then close.
pub struct Connection<S> {
    stream: S,
    session: FramingSession,
    read_chunk_size: usize,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, session: FramingSession) -> Self {
        Self::with_read_chunk_size(stream, session, DEFAULT_READ_CHUNK_SIZE)
    }

    pub fn with_read_chunk_size(stream: S, session: FramingSession, read_chunk_size: usize) -> Self {
        Self {
            stream,
            session,
            read_chunk_size: read_chunk_size.max(1),
        }
    }

    /// Runs the connection to completion and reports why it closed.
    ///
    /// Only a failure to shut the stream down is returned as an error; every
    /// protocol-level outcome is a [`CloseReason`].
    pub async fn run(mut self) -> anyhow::Result<CloseReason> {
        let mut chunk = vec![0u8; self.read_chunk_size];

        loop {
            let step = match self.stream.read(&mut chunk).await {
                Ok(0) => self.session.on_eof(),
                Ok(n) => self.session.on_read(&chunk[..n]),
                Err(e) => self.session.on_read_error(&e),
            };

            match step {
                Step::NeedMore => continue,
                Step::Dispatch => {
                    if let Some(bytes) = self.session.respond().await {
                        let mut writer = ResponseWriter::new(bytes);
                        let result = writer.write_to_stream(&mut self.stream).await;
                        self.session.on_write_complete(result);
                    }
                    break;
                }
                Step::Close => break,
            }
        }

        let closed = self.stream.shutdown().await;
        drop(self.stream);
        let reason = self.session.finish();

        match closed {
            Ok(()) => Ok(reason),
            Err(e) if reason == CloseReason::Responded => Err(e.into()),
            Err(e) => {
                tracing::debug!(error = %e, ?reason, "Shutdown after failed session");
                Ok(reason)
            }
        }
    }
}
