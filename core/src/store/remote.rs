//! HTTP-backed blog store.
//!
//! `BlogApi` decides what goes on the wire; this type only performs the
//! round-trip with `reqwest` and hands the raw status and body back for
//! parsing. Transport failures never reach `parse_*`.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::BlogStore;
use crate::api::BlogApi;
use crate::error::{Action, ApiError, FetchCause};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BlogPost, CreateBlog};

#[derive(Debug, Clone)]
pub struct RemoteStore {
    api: BlogApi,
    http: reqwest::Client,
}

impl RemoteStore {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(format!("blog-core/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(BlogApi::new(base_url), http))
    }

    pub fn with_client(api: BlogApi, http: reqwest::Client) -> Self {
        Self { api, http }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    async fn execute(&self, action: Action, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let transport = |e: reqwest::Error| ApiError::fetch(action, FetchCause::Transport(e));

        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl BlogStore for RemoteStore {
    async fn list_all(&self) -> Result<Vec<BlogPost>, ApiError> {
        let response = self
            .execute(Action::ListBlogs, self.api.build_list_blogs())
            .await?;
        self.api.parse_list_blogs(response)
    }

    async fn get_by_id(&self, id: u64) -> Result<BlogPost, ApiError> {
        let response = self
            .execute(Action::GetBlog, self.api.build_get_blog(id))
            .await?;
        self.api.parse_get_blog(response)
    }

    async fn create(&self, input: CreateBlog) -> Result<BlogPost, ApiError> {
        let request = self.api.build_create_blog(&input, Utc::now())?;
        let response = self.execute(Action::CreateBlog, request).await?;
        self.api.parse_create_blog(response)
    }
}
