use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use super::store::{StoreBackend, StoreError, new_record};
use crate::models::Preorder;

/// Backend for a remote JSON object: the whole collection lives at one URL,
/// fetched with GET and replaced with PUT. The mutex serializes the
/// read-modify-write cycle within this process.
pub struct RemoteStore {
    http: Client,
    url: String,
    lock: Mutex<()>,
}

impl RemoteStore {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
            lock: Mutex::new(()),
        }
    }

    async fn fetch(&self) -> Result<Vec<Preorder>, StoreError> {
        let res = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        // An object that has never been written reads as empty.
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(StoreError::Backend(format!(
                "remote store fetch failed: {status} {body}"
            )));
        }

        res.json::<Vec<Preorder>>()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn push(&self, records: &[Preorder]) -> Result<(), StoreError> {
        let res = self
            .http
            .put(&self.url)
            .json(records)
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(StoreError::Backend(format!(
                "remote store write failed: {status} {body}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl StoreBackend for RemoteStore {
    async fn list(&self) -> Result<Vec<Preorder>, StoreError> {
        self.fetch().await
    }

    async fn insert(&self, email: &str, price: i64) -> Result<Preorder, StoreError> {
        let _guard = self.lock.lock().await;

        let mut records = self.fetch().await?;
        if records.iter().any(|p| p.email.eq_ignore_ascii_case(email)) {
            return Err(StoreError::DuplicateEmail);
        }

        let record = new_record(email, price);
        records.push(record.clone());
        self.push(&records).await?;

        Ok(record)
    }
}
