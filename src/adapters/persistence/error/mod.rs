pub mod persistence_error;

pub use persistence_error::PersistenceError;
