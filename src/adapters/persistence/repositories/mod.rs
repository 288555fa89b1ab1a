pub mod pg_auth_store;

pub use pg_auth_store::PgAuthStore;
