pub mod database;
pub mod error;
pub mod models;
pub mod repositories;

pub use database::{Database, PoolConfig};
pub use error::PersistenceError;
pub use repositories::PgAuthStore;
