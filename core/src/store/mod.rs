//! Storage strategies behind the blog data client.
//!
//! `RemoteStore` talks to the JSON backend over HTTP; `InMemoryStore` serves
//! a process-local dataset for preview environments that cannot reach it.

mod memory;
mod remote;

pub use memory::{InMemoryStore, Latency};
pub use remote::RemoteStore;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{BlogPost, CreateBlog};

/// The three operations every blog backend supports.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// All posts. The returned list is an owned snapshot.
    async fn list_all(&self) -> Result<Vec<BlogPost>, ApiError>;

    /// A single post by id.
    async fn get_by_id(&self, id: u64) -> Result<BlogPost, ApiError>;

    /// Create a post, stamping its creation date with the current time.
    async fn create(&self, input: CreateBlog) -> Result<BlogPost, ApiError>;
}
