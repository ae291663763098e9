use std::time::Duration;

use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::{Document, doc},
    options::{ClientOptions, IndexOptions},
};
use tracing::info;

use crate::config::MongoConfig;

/// Pooled connection to the document store
#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn connect(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(Duration::from_secs(300));
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database);

        // fail at startup rather than on the first request
        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database: {}", config.database);

        Ok(Self { db })
    }

    /// Unique index on `user_id` backing the registration pre-check.
    pub async fn ensure_user_indexes(&self, collection: &str) -> Result<(), mongodb::error::Error> {
        let users = self.collection::<Document>(collection);
        let index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        users.create_index(index).await?;
        info!("Index ready: {}(user_id, unique)", collection);
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}
