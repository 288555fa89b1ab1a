//! Federation adapters: one module per third-party provider, unified
//! behind [`FederationGateway`].

pub mod apple;
pub mod error;
pub mod exchange;
pub mod facebook;
pub mod gateway;
pub mod google;
pub mod http_client;
pub mod id_token;
pub mod microsoft;

pub use error::OAuthProviderError;
pub use gateway::FederationGateway;
