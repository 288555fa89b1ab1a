pub mod jwt_error;

pub use jwt_error::JwtError;
