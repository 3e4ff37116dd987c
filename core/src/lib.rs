//! Async data-access client for the blog listing application.
//!
//! # Overview
//! Lists, fetches and creates blog posts against a JSON backend, or against
//! an in-memory dataset when the calling page is hosted somewhere the
//! backend cannot be reached.
//!
//! # Design
//! - `BlogStore` is the seam: `RemoteStore` (HTTP) and `InMemoryStore`
//!   (seeded, process-local) implement it, and `BlogClient` picks one once.
//! - `BlogApi` builds `HttpRequest` values and parses `HttpResponse` values
//!   without I/O, so the wire contract is tested on its own.
//! - Simulated latency of the in-memory store is a parameter, zero by default.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mode;
pub mod seed;
pub mod store;
pub mod types;

pub use api::BlogApi;
pub use client::BlogClient;
pub use config::ClientConfig;
pub use error::{Action, ApiError, FetchCause};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mode::Mode;
pub use store::{BlogStore, InMemoryStore, Latency, RemoteStore};
pub use types::{BlogPost, CreateBlog, NewBlog};
