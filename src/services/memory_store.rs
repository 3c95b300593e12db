use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::{StoreBackend, StoreError, new_record};
use crate::models::Preorder;

/// In-process backend. The mutex is held across the duplicate scan and the
/// push, so check-then-insert is a single critical section.
pub struct MemoryStore {
    records: Mutex<Vec<Preorder>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<Preorder>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreBackend for MemoryStore {
    async fn list(&self) -> Result<Vec<Preorder>, StoreError> {
        Ok(self.records.lock().await.clone())
    }

    async fn insert(&self, email: &str, price: i64) -> Result<Preorder, StoreError> {
        let mut records = self.records.lock().await;

        if records.iter().any(|p| p.email.eq_ignore_ascii_case(email)) {
            return Err(StoreError::DuplicateEmail);
        }

        let record = new_record(email, price);
        records.push(record.clone());

        Ok(record)
    }
}
