pub mod apple_client_secret;
pub mod es256_signer;

pub use apple_client_secret::mint_apple_client_secret;
pub use es256_signer::Es256TokenSigner;
