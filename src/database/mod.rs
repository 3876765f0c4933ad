pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryWorkoutStore;
pub use postgres::PgWorkoutStore;
pub use store::WorkoutStore;

use std::sync::Arc;

use crate::config::{DatabaseConfig, StoreBackend};

/// Open the store selected by configuration
pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn WorkoutStore>, DatabaseError> {
    match config.backend {
        StoreBackend::Postgres => Ok(Arc::new(PgWorkoutStore::connect(config).await?)),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryWorkoutStore::seeded()))
        }
    }
}
