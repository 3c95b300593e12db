use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::{StoreBackend, StoreError, new_record};
use crate::models::Preorder;

/// Local JSON-file backend: one pretty-printed array, read in full and written
/// back in full. A missing file reads as an empty list. The mutex serializes
/// the read-check-append-write cycle.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    async fn read_records(&self) -> Result<Vec<Preorder>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Backend(e.to_string())),
        };

        serde_json::from_str(&raw).map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn write_records(&self, records: &[Preorder]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| StoreError::Backend(e.to_string()))?;
            }
        }

        let raw =
            serde_json::to_string_pretty(records).map_err(|e| StoreError::Backend(e.to_string()))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl StoreBackend for FileStore {
    async fn list(&self) -> Result<Vec<Preorder>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_records().await
    }

    async fn insert(&self, email: &str, price: i64) -> Result<Preorder, StoreError> {
        let _guard = self.lock.lock().await;

        let mut records = self.read_records().await?;
        if records.iter().any(|p| p.email.eq_ignore_ascii_case(email)) {
            return Err(StoreError::DuplicateEmail);
        }

        let record = new_record(email, price);
        records.push(record.clone());
        self.write_records(&records).await?;

        Ok(record)
    }
}
