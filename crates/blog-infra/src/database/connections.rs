use std::time::Duration;

#[cfg(feature = "mongodb")]
use mongodb::{Client, Collection, Database, error::Error as MongoError, options::ClientOptions};

#[cfg(feature = "mongodb")]
use super::document::{POSTS_COLLECTION, PostDocument};

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    pub app_name: String,
}

/// Long-lived handle to the MongoDB deployment.
///
/// Created once at startup; the driver pools connections internally, so
/// clones of the collection handle share the same pool.
#[cfg(feature = "mongodb")]
pub struct DatabaseConnection {
    pub client: Client,
    pub db: Database,
}

#[cfg(feature = "mongodb")]
impl DatabaseConnection {
    /// Connect and verify the deployment answers a ping.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, MongoError> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(config.app_name.clone());
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        let conn = Self { client, db };
        conn.ping().await?;
        tracing::info!(
            database = %config.database,
            "Database connected (pool: {})",
            config.max_pool_size
        );

        Ok(conn)
    }

    /// Round-trip a `ping` command to the deployment.
    pub async fn ping(&self) -> Result<(), MongoError> {
        self.db.run_command(bson::doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Handle to the `posts` collection.
    pub fn posts(&self) -> Collection<PostDocument> {
        self.db.collection(POSTS_COLLECTION)
    }
}
