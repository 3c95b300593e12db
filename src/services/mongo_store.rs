use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
};

use super::store::{StoreBackend, StoreError, new_record, today_utc};
use crate::models::{Preorder, Stats};

/// Hosted backend on a MongoDB collection. Uniqueness is owned by the unique
/// index on `email` (see db_init); the driver's duplicate-key error is the
/// authoritative signal under concurrent inserts.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn preorders(&self) -> Collection<Preorder> {
        self.db.collection::<Preorder>("preorders")
    }
}

#[async_trait]
impl StoreBackend for MongoStore {
    async fn list(&self) -> Result<Vec<Preorder>, StoreError> {
        let mut cursor = self
            .preorders()
            .find(doc! {}, None)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let mut items: Vec<Preorder> = Vec::new();
        while let Some(res) = cursor.next().await {
            items.push(res.map_err(|e| StoreError::Backend(e.to_string()))?);
        }

        Ok(items)
    }

    async fn insert(&self, email: &str, price: i64) -> Result<Preorder, StoreError> {
        let preorders = self.preorders();

        // fast path; the unique index still decides races
        match preorders.find_one(doc! { "email": email }, None).await {
            Ok(Some(_)) => return Err(StoreError::DuplicateEmail),
            Ok(None) => {}
            Err(e) => return Err(StoreError::Backend(e.to_string())),
        }

        let record = new_record(email, price);
        if let Err(e) = preorders.insert_one(&record, None).await {
            let msg = e.to_string();
            if msg.contains("E11000") {
                return Err(StoreError::DuplicateEmail);
            }
            return Err(StoreError::Backend(msg));
        }

        Ok(record)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn stats(&self) -> Result<Stats, StoreError> {
        let preorders = self.preorders();

        let total = preorders
            .count_documents(doc! {}, None)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        // timestamps are RFC 3339 strings, so "today" is a prefix match
        let today = preorders
            .count_documents(
                doc! { "timestamp": { "$regex": format!("^{}", today_utc()) } },
                None,
            )
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let pipeline = vec![doc! { "$group": { "_id": null, "total": { "$sum": "$price" } } }];
        let mut cursor = self
            .db
            .collection::<Document>("preorders")
            .aggregate(pipeline, None)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let mut total_revenue = 0i64;
        if let Some(res) = cursor.next().await {
            let group = res.map_err(|e| StoreError::Backend(e.to_string()))?;
            total_revenue = match group.get("total") {
                Some(Bson::Int64(v)) => *v,
                Some(Bson::Int32(v)) => i64::from(*v),
                Some(Bson::Double(v)) => *v as i64,
                _ => 0,
            };
        }

        Ok(Stats {
            total_preorders: total as i64,
            today_preorders: today as i64,
            total_revenue,
        })
    }
}
