use std::env;

/// Which storage backend fulfils the preorder store contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    File,
    Remote,
    Mongo,
}

impl BackendKind {
    pub fn parse(s: &str) -> Option<BackendKind> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Some(BackendKind::Memory),
            "file" => Some(BackendKind::File),
            "remote" => Some(BackendKind::Remote),
            "mongodb" | "mongo" => Some(BackendKind::Mongo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub backend: BackendKind,

    pub mongodb_uri: String,
    pub mongodb_db: String,

    pub data_file: String,
    pub remote_store_url: String,

    pub host: String,
    pub port: u16,

    pub admin_token: String,
    pub storage_timeout_ms: u64,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let backend = match env::var("STORAGE_BACKEND") {
        Ok(raw) => BackendKind::parse(&raw).unwrap_or_else(|| {
            tracing::warn!("unknown STORAGE_BACKEND {raw:?}, falling back to memory");
            BackendKind::Memory
        }),
        Err(_) => BackendKind::Memory,
    };

    let mongodb_uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let mongodb_db = env::var("MONGODB_DB")
        .unwrap_or_else(|_| "keycheck".to_string());

    let data_file = env::var("DATA_FILE")
        .unwrap_or_else(|_| "data/preorders.json".to_string());

    let remote_store_url = env::var("REMOTE_STORE_URL").unwrap_or_default();

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(5001);

    let admin_token =
        env::var("ADMIN_TOKEN").unwrap_or_else(|_| "change-me-admin-token".to_string());

    let storage_timeout_ms = env::var("STORAGE_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(5000);

    Settings {
        backend,
        mongodb_uri,
        mongodb_db,
        data_file,
        remote_store_url,
        host,
        port,
        admin_token,
        storage_timeout_ms,
    }
}
