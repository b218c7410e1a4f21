#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortlink::domain::entities::{Link, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::StoreError;
use shortlink::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use shortlink::routes;
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_memory_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), BASE_URL);

    (state, repo)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    AppState::new(repo, BASE_URL)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(routes::router(state, None)).unwrap()
}

pub async fn create_test_link(repo: &dyn LinkRepository, code: &str, url: &str) -> Link {
    repo.insert(NewLink::new(code, url)).await.unwrap()
}

pub async fn insert_pg_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, target_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

/// Repository whose every call fails as if the backend were down.
pub struct UnavailableRepository;

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn exists(&self, _code: &str) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, StoreError> {
        Err(unavailable())
    }

    async fn insert(&self, _new_link: NewLink) -> Result<Link, StoreError> {
        Err(unavailable())
    }

    async fn list_recent(&self) -> Result<Vec<Link>, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

fn unavailable() -> StoreError {
    StoreError::Backend("connection refused".to_string())
}
