#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use chrono::Utc;
use linkhop::api::handlers::health_handler;
use linkhop::application::services::{ClickService, LinkService};
use linkhop::domain::entities::{Click, Link, NewClick};
use linkhop::domain::repositories::{ClickRepository, LinkRepository};
use linkhop::error::AppError;
use linkhop::infrastructure::cache::{CacheService, MemoryCache};
use linkhop::state::AppState;
use serde_json::json;
use sqlx::PgPool;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Link store kept in memory, counting every lookup.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    lookups: AtomicUsize,
    unreachable: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn with_links(links: &[(&str, &str)]) -> Self {
        let repo = Self::default();
        for (from, to) in links {
            repo.insert(from, to);
        }
        repo
    }

    pub fn insert(&self, from: &str, to: &str) -> i64 {
        let mut links = self.links.lock().unwrap();
        let id = links.len() as i64 + 1;
        links.push(Link::new(id, from.to_string(), to.to_string(), Utc::now()));
        id
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn ids(&self) -> Vec<i64> {
        self.links.lock().unwrap().iter().map(|l| l.id).collect()
    }

    fn check_reachable(&self) -> Result<(), AppError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_from(&self, from: &str) -> Result<Option<Link>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.from == from).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_reachable()
    }
}

/// Click store kept in memory. Rejects unknown link ids like the foreign key does.
pub struct InMemoryClickRepository {
    known_links: Vec<i64>,
    clicks: Mutex<Vec<Click>>,
}

impl InMemoryClickRepository {
    pub fn new(known_links: Vec<i64>) -> Self {
        Self {
            known_links,
            clicks: Mutex::new(Vec::new()),
        }
    }

    pub fn clicks(&self) -> Vec<Click> {
        self.clicks.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        if !self.known_links.contains(&new_click.link_id) {
            return Err(AppError::bad_request(
                "Referenced record does not exist",
                json!({ "constraint": "clicks_link_fkey" }),
            ));
        }

        let mut clicks = self.clicks.lock().unwrap();
        let click = Click::new(clicks.len() as i64 + 1, new_click.link_id, Utc::now());
        clicks.push(click.clone());
        Ok(click)
    }
}

pub struct TestContext {
    pub state: AppState,
    pub links: Arc<InMemoryLinkRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
}

pub fn create_test_context_with_cache(
    links: InMemoryLinkRepository,
    cache: Arc<dyn CacheService>,
) -> TestContext {
    let links = Arc::new(links);
    let clicks = Arc::new(InMemoryClickRepository::new(links.ids()));

    let state = AppState::new(
        Arc::new(LinkService::new(links.clone(), cache.clone())),
        Arc::new(ClickService::new(clicks.clone())),
        cache,
    );

    TestContext {
        state,
        links,
        clicks,
    }
}

pub fn create_test_context(links: InMemoryLinkRepository) -> TestContext {
    create_test_context_with_cache(links, Arc::new(MemoryCache::new(1_000, 60)))
}

pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", linkhop::api::routes::routes())
        .with_state(state)
}

pub async fn create_test_link(pool: &PgPool, from: &str, to: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(r#"INSERT INTO links ("from", "to") VALUES ($1, $2) RETURNING id"#)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_clicks(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clicks WHERE link = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
