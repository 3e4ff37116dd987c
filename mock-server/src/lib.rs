use std::{path::Path as FsPath, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: u64,
    pub title: String,
    pub category: Vec<String>,
    pub description: String,
    pub date: String,
    pub cover_image: String,
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlog {
    pub title: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub content: String,
}

/// JSON-server style database file: `{ "blogs": [...] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DbFile {
    #[serde(default)]
    pub blogs: Vec<Blog>,
}

impl DbFile {
    pub async fn load(path: impl AsRef<FsPath>) -> Result<Self, std::io::Error> {
        let raw = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&raw).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

pub type Db = Arc<RwLock<Vec<Blog>>>;

pub fn app() -> Router {
    app_with_blogs(Vec::new())
}

pub fn app_with_blogs(blogs: Vec<Blog>) -> Router {
    let db: Db = Arc::new(RwLock::new(blogs));
    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route("/blogs/{id}", get(get_blog))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_blogs(listener, Vec::new()).await
}

pub async fn run_with_blogs(listener: TcpListener, blogs: Vec<Blog>) -> Result<(), std::io::Error> {
    info!(addr = ?listener.local_addr().ok(), count = blogs.len(), "serving blogs");
    axum::serve(listener, app_with_blogs(blogs)).await
}

async fn list_blogs(State(db): State<Db>) -> Json<Vec<Blog>> {
    let blogs = db.read().await;
    Json(blogs.clone())
}

async fn create_blog(
    State(db): State<Db>,
    Json(input): Json<CreateBlog>,
) -> (StatusCode, Json<Blog>) {
    let mut blogs = db.write().await;
    let id = blogs.iter().map(|b| b.id).max().unwrap_or(0) + 1;
    let blog = Blog {
        id,
        title: input.title,
        category: input.category,
        description: input.description,
        date: input.date,
        cover_image: input.cover_image,
        content: input.content,
    };
    blogs.push(blog.clone());
    debug!(id, "created blog");
    (StatusCode::CREATED, Json(blog))
}

async fn get_blog(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Blog>, StatusCode> {
    let blogs = db.read().await;
    blogs
        .iter()
        .find(|b| b.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
