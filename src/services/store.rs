use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use crate::models::{Preorder, Stats};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("storage call timed out")]
    Timeout,

    #[error("storage error: {0}")]
    Backend(String),
}

/// Contract every storage backend fulfils. `insert` receives an already
/// normalized email and must admit at most one winner under concurrent calls
/// with the same email.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<Preorder>, StoreError>;

    async fn insert(&self, email: &str, price: i64) -> Result<Preorder, StoreError>;

    async fn stats(&self) -> Result<Stats, StoreError> {
        Ok(compute_stats(&self.list().await?))
    }

    /// Cheap reachability probe; backends with a native ping override this.
    async fn ping(&self) -> Result<(), StoreError> {
        self.list().await.map(|_| ())
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// UTC calendar day used for the "today" bucket, e.g. "2025-09-18".
pub fn today_utc() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

pub fn compute_stats(records: &[Preorder]) -> Stats {
    let today = today_utc();

    Stats {
        total_preorders: records.len() as i64,
        today_preorders: records
            .iter()
            .filter(|p| p.timestamp.starts_with(&today))
            .count() as i64,
        total_revenue: records.iter().map(|p| p.price).sum(),
    }
}

/// Builds a fresh record: timestamp-derived id, RFC 3339 UTC timestamp,
/// status fixed to "pending".
pub fn new_record(email: &str, price: i64) -> Preorder {
    let now = Utc::now();

    Preorder {
        id: now.timestamp_millis(),
        email: email.to_string(),
        price,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        status: "pending".to_string(),
    }
}

/// Store facade handed to handlers. Normalizes input and bounds every backend
/// call with a timeout; which backend sits behind it is a config decision.
#[derive(Clone)]
pub struct PreorderStore {
    backend: Arc<dyn StoreBackend>,
    timeout: Duration,
}

impl PreorderStore {
    pub fn new(backend: Arc<dyn StoreBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub async fn list(&self) -> Result<Vec<Preorder>, StoreError> {
        self.bounded(self.backend.list()).await
    }

    pub async fn insert(&self, email: &str, price: i64) -> Result<Preorder, StoreError> {
        let email = normalize_email(email);
        self.bounded(self.backend.insert(&email, price)).await
    }

    pub async fn stats(&self) -> Result<Stats, StoreError> {
        self.bounded(self.backend.stats()).await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(self.backend.ping()).await
    }

    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, StoreError>> + Send,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| StoreError::Timeout)?
    }
}
