//! In-memory blog store - used when the backend is unreachable.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::BlogStore;
use crate::error::ApiError;
use crate::seed::seed_blogs;
use crate::types::{BlogPost, CreateBlog};

/// Artificial delay before each in-memory operation completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self::default()
    }

    /// Timings that make a preview feel like a real network round-trip.
    pub fn preview() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            create: Duration::from_millis(500),
        }
    }
}

struct MockState {
    blogs: Vec<BlogPost>,
    next_id: u64,
}

/// Process-local blog store seeded with three posts.
///
/// Data is lost when the store is dropped. Each instance owns its own
/// dataset and id counter.
pub struct InMemoryStore {
    state: RwLock<MockState>,
    latency: Latency,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_blogs(seed_blogs())
    }

    /// Start from an arbitrary dataset. New ids continue after the highest
    /// existing one.
    pub fn with_blogs(blogs: Vec<BlogPost>) -> Self {
        let next_id = blogs.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(MockState { blogs, next_id }),
            latency: Latency::none(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    async fn delay(duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<BlogPost>, ApiError> {
        Self::delay(self.latency.list).await;

        let mut blogs = self.state.read().await.blogs.clone();
        blogs.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(blogs)
    }

    async fn get_by_id(&self, id: u64) -> Result<BlogPost, ApiError> {
        Self::delay(self.latency.get).await;

        let state = self.state.read().await;
        state
            .blogs
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ApiError::NotFound { id })
    }

    async fn create(&self, input: CreateBlog) -> Result<BlogPost, ApiError> {
        Self::delay(self.latency.create).await;

        // Id assignment and append happen under one write lock
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;
        let blog = input.into_post(id, Utc::now());
        state.blogs.push(blog.clone());
        Ok(blog)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use chrono::{Duration as ChronoDuration, TimeZone};

    use super::*;
    use crate::seed::FIRST_CREATED_ID;

    fn input(title: &str) -> CreateBlog {
        CreateBlog {
            title: title.to_string(),
            category: vec!["X".to_string()],
            description: "D".to_string(),
            cover_image: "url".to_string(),
            content: "C".to_string(),
        }
    }

    fn post(id: u64, day: u32) -> BlogPost {
        input(&format!("post {id}")).into_post(id, Utc.with_ymd_and_hms(2025, 6, day, 8, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn fresh_store_lists_seeds_newest_first() {
        let store = InMemoryStore::new();
        let ids: Vec<u64> = store.list_all().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn list_sorts_by_date_descending() {
        let store = InMemoryStore::with_blogs(vec![post(1, 3), post(2, 20), post(3, 1), post(4, 11)]);
        let blogs = store.list_all().await.unwrap();
        let ids: Vec<u64> = blogs.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert!(blogs.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[tokio::test]
    async fn list_does_not_reorder_the_store() {
        let store = InMemoryStore::with_blogs(vec![post(1, 3), post(2, 20)]);
        store.list_all().await.unwrap();
        let stored: Vec<u64> = store.state.read().await.blogs.iter().map(|b| b.id).collect();
        assert_eq!(stored, vec![1, 2]);
    }

    #[tokio::test]
    async fn list_returns_a_snapshot() {
        let store = InMemoryStore::new();
        let mut first = store.list_all().await.unwrap();
        first.clear();
        first.push(post(99, 1));

        let second = store.list_all().await.unwrap();
        assert_eq!(second.len(), 3);
        assert!(second.iter().all(|b| b.id != 99));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.get_by_id(999).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { id: 999 }));
    }

    #[tokio::test]
    async fn get_returns_seed_by_id() {
        let store = InMemoryStore::new();
        let blog = store.get_by_id(2).await.unwrap();
        assert_eq!(blog.title, "Full Stack Development Trends");
    }

    #[tokio::test]
    async fn create_round_trips_through_get() {
        let store = InMemoryStore::new();
        let before = Utc::now();
        let created = store.create(input("T")).await.unwrap();
        let after = Utc::now();

        assert!(created.id >= FIRST_CREATED_ID);
        assert!(created.date >= before - ChronoDuration::seconds(1));
        assert!(created.date <= after + ChronoDuration::seconds(1));
        assert_eq!(created.title, "T");
        assert_eq!(created.category, vec!["X".to_string()]);
        assert_eq!(created.description, "D");
        assert_eq!(created.cover_image, "url");
        assert_eq!(created.content, "C");

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(store.list_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn sequential_creates_get_increasing_ids() {
        let store = InMemoryStore::new();
        let mut ids = Vec::new();
        for n in 0..5 {
            ids.push(store.create(input(&format!("post {n}"))).await.unwrap().id);
        }
        assert_eq!(ids, vec![4, 5, 6, 7, 8]);
    }

    #[tokio::test]
    async fn created_post_lists_first() {
        let store = InMemoryStore::new();
        let created = store.create(input("latest")).await.unwrap();
        let blogs = store.list_all().await.unwrap();
        assert_eq!(blogs[0].id, created.id);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_never_share_an_id() {
        let store = Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..32)
            .map(|n| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(input(&format!("post {n}"))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap().unwrap().id));
        }
        assert_eq!(ids.len(), 32);
        assert_eq!(store.list_all().await.unwrap().len(), 35);
    }

    #[tokio::test]
    async fn independent_instances_do_not_share_state() {
        let a = InMemoryStore::new();
        let b = InMemoryStore::new();
        a.create(input("only in a")).await.unwrap();
        assert_eq!(b.list_all().await.unwrap().len(), 3);
        assert_eq!(b.create(input("b")).await.unwrap().id, 4);
    }

    #[tokio::test]
    async fn empty_store_starts_ids_at_one() {
        let store = InMemoryStore::with_blogs(Vec::new());
        assert_eq!(store.create(input("first")).await.unwrap().id, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn preview_latency_is_honoured() {
        let store = InMemoryStore::new().with_latency(Latency::preview());

        let start = tokio::time::Instant::now();
        store.list_all().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        store.get_by_id(1).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn default_latency_is_zero() {
        assert_eq!(InMemoryStore::new().latency(), Latency::none());
        assert!(Latency::none().list.is_zero());
    }
}
