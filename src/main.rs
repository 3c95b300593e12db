use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mongodb::Client;

use keycheck::{
    AppState, config,
    config::BackendKind,
    routes,
    services::{
        db_init, file_store::FileStore, memory_store::MemoryStore, mongo_store::MongoStore,
        remote_store::RemoteStore, store::PreorderStore, store::StoreBackend,
    },
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let backend: Arc<dyn StoreBackend> = match settings.backend {
        BackendKind::Memory => Arc::new(MemoryStore::new()),
        BackendKind::File => Arc::new(FileStore::new(&settings.data_file)),
        BackendKind::Remote => {
            if settings.remote_store_url.is_empty() {
                panic!("REMOTE_STORE_URL is required when STORAGE_BACKEND=remote");
            }
            Arc::new(RemoteStore::new(settings.remote_store_url.clone()))
        }
        BackendKind::Mongo => {
            let client = Client::with_uri_str(&settings.mongodb_uri)
                .await
                .expect("Failed to connect to MongoDB");
            let db = client.database(&settings.mongodb_db);

            db_init::ensure_indexes(&db)
                .await
                .expect("Failed to ensure MongoDB indexes");

            Arc::new(MongoStore::new(db))
        }
    };

    let store = PreorderStore::new(backend, Duration::from_millis(settings.storage_timeout_ms));

    let state = AppState {
        store,
        settings: settings.clone(),
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
