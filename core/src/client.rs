//! The blog data client used by pages and other callers.
//!
//! # Design
//! `BlogClient` picks a `BlogStore` once, at construction, and forwards every
//! call to it. Nothing is retried and no fallback is attempted at call time:
//! a remote failure is the caller's to present.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::mode::Mode;
use crate::store::{BlogStore, InMemoryStore, RemoteStore};
use crate::types::{BlogPost, CreateBlog};

#[derive(Clone)]
pub struct BlogClient {
    mode: Mode,
    store: Arc<dyn BlogStore>,
}

impl BlogClient {
    /// Detect the mode from `config.page_host` and build the matching store.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mode = Mode::detect(config.page_host.as_deref());
        info!(%mode, base_url = %config.base_url, "blog client initialized");
        Self::for_mode(mode, config)
    }

    /// Build the store for an explicitly chosen mode.
    pub fn for_mode(mode: Mode, config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let store: Arc<dyn BlogStore> = match mode {
            Mode::Remote => Arc::new(RemoteStore::new(&config.base_url)?),
            Mode::Mock => Arc::new(InMemoryStore::new().with_latency(config.latency)),
        };
        Ok(Self::with_store(mode, store))
    }

    pub fn with_store(mode: Mode, store: Arc<dyn BlogStore>) -> Self {
        Self { mode, store }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// All posts. In mock mode they come back newest first; in remote mode
    /// in whatever order the backend returns.
    pub async fn list_all(&self) -> Result<Vec<BlogPost>, ApiError> {
        let result = self.store.list_all().await;
        match &result {
            Ok(blogs) => debug!(mode = %self.mode, count = blogs.len(), "listed blogs"),
            Err(e) => warn!(mode = %self.mode, error = %e, "listing blogs failed"),
        }
        result
    }

    pub async fn get_by_id(&self, id: u64) -> Result<BlogPost, ApiError> {
        let result = self.store.get_by_id(id).await;
        match &result {
            Ok(_) => debug!(mode = %self.mode, id, "fetched blog"),
            Err(e) => warn!(mode = %self.mode, id, error = %e, "fetching blog failed"),
        }
        result
    }

    pub async fn create(&self, input: CreateBlog) -> Result<BlogPost, ApiError> {
        let result = self.store.create(input).await;
        match &result {
            Ok(blog) => debug!(mode = %self.mode, id = blog.id, "created blog"),
            Err(e) => warn!(mode = %self.mode, error = %e, "creating blog failed"),
        }
        result
    }
}

impl std::fmt::Debug for BlogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogClient").field("mode", &self.mode).finish_non_exhaustive()
    }
}
