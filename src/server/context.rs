use std::sync::Arc;

use crate::config::Config;
use crate::http::session::{FramingSession, SessionConfig};
use crate::router::Router;

/// Immutable state shared by every connection task.
#[derive(Clone)]
pub struct ServerContext {
    router: Arc<Router>,
    session: SessionConfig,
    read_chunk_size: usize,
}

impl ServerContext {
    pub fn new(router: Router, session: SessionConfig, read_chunk_size: usize) -> Self {
        Self {
            router: Arc::new(router),
            session,
            read_chunk_size,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Router::new(cfg.static_files.doc_root.clone()),
            cfg.session_config(),
            cfg.server.read_chunk_size,
        )
    }

    pub fn read_chunk_size(&self) -> usize {
        self.read_chunk_size
    }

    pub fn new_session(&self) -> FramingSession {
        FramingSession::new(self.router.clone(), &self.session)
    }
}
