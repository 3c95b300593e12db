use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preorder {
    pub id: i64,

    // normalized: lower-cased, trimmed; unique across records
    pub email: String,

    pub price: i64,

    // RFC 3339, UTC
    pub timestamp: String,

    // always "pending"; no transition path exists
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total_preorders: i64,
    pub today_preorders: i64,
    pub total_revenue: i64,
}
