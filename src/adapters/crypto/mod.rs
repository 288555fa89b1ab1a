pub mod error;
pub mod jwt;
pub mod password;
pub mod tokens;

pub use jwt::Es256TokenSigner;
pub use password::Pbkdf2PasswordHasher;
pub use tokens::CryptoTokenMinter;
