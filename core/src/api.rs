//! Stateless HTTP request builder and response parser for the blog backend.
//!
//! # Design
//! `BlogApi` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Any 2xx status is accepted; everything
//! else becomes a `FetchFailure` tagged with the operation.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::error::{Action, ApiError, FetchCause};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BlogPost, CreateBlog, NewBlog};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct BlogApi {
    base_url: String,
}

impl BlogApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_blogs(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/blogs", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_blog(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/blogs/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `date` is the creation timestamp sent along with the input; the
    /// caller passes the current time.
    pub fn build_create_blog(
        &self,
        input: &CreateBlog,
        date: DateTime<Utc>,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&NewBlog { input, date })
            .map_err(|e| ApiError::fetch(Action::CreateBlog, FetchCause::Encode(e.to_string())))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/blogs", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_blogs(&self, response: HttpResponse) -> Result<Vec<BlogPost>, ApiError> {
        parse_json(Action::ListBlogs, response)
    }

    pub fn parse_get_blog(&self, response: HttpResponse) -> Result<BlogPost, ApiError> {
        parse_json(Action::GetBlog, response)
    }

    pub fn parse_create_blog(&self, response: HttpResponse) -> Result<BlogPost, ApiError> {
        parse_json(Action::CreateBlog, response)
    }
}

impl Default for BlogApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn parse_json<T: DeserializeOwned>(action: Action, response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::fetch(
            action,
            FetchCause::Status {
                status: response.status,
                body: response.body,
            },
        ));
    }
    serde_json::from_str(&response.body)
        .map_err(|e| ApiError::fetch(action, FetchCause::Decode(e.to_string())))
}
