//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "mongodb")]
use blog_infra::{DatabaseConnection, MongoPostRepository};

/// Which storage backend the server is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Mongo,
    Memory,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Mongo => "mongodb",
            Storage::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub storage: Storage,
    #[cfg(feature = "mongodb")]
    pub db: Option<Arc<DatabaseConnection>>,
}

impl AppState {
    /// Build the application state with the configured storage backend.
    ///
    /// A configured but unreachable MongoDB is a startup error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> io::Result<Self> {
        #[cfg(feature = "mongodb")]
        let state = match db_config {
            Some(config) => {
                let conn = DatabaseConnection::init(config).await.map_err(|e| {
                    tracing::error!("Failed to connect to database: {}", e);
                    io::Error::other(e.to_string())
                })?;
                let repo = Arc::new(MongoPostRepository::new(conn.posts()));
                Self {
                    posts: PostService::new(repo),
                    storage: Storage::Mongo,
                    db: Some(Arc::new(conn)),
                }
            }
            None => {
                tracing::warn!("MONGODB_URI not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "mongodb"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("Built without mongodb feature - ignoring MONGODB_URI");
            }
            tracing::info!("Running without mongodb feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage.as_str(), "Application state initialized");
        Ok(state)
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        let repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        Self {
            posts: PostService::new(repo),
            storage: Storage::Memory,
            #[cfg(feature = "mongodb")]
            db: None,
        }
    }
}
