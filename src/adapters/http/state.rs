//! Shared application state.
//!
//! Holds the wired ports and the handful of concrete collaborators that sit
//! above them (the redirect validator, the federation gateway) plus the
//! policy objects every use case needs. Handlers build the use-case struct
//! they need per request from these `Arc` clones — construction is cheap,
//! the state itself owns nothing mutable.

use std::sync::Arc;

use crate::adapters::oauth::FederationGateway;
use crate::adapters::redirect::RedirectValidator;
use crate::config::AppConfig;
use crate::core::credentials::CredentialPolicy;
use crate::core::usecases::policies::SessionPolicy;
use crate::core::usecases::ports::{AuditSink, AuthStore, Clock, EmailSender, PasswordHasher, RateLimiter, TokenMinter, TokenSigner};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn AuthStore>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub signer: Arc<dyn TokenSigner>,
    pub minter: Arc<dyn TokenMinter>,
    pub clock: Arc<dyn Clock>,
    pub redirect_validator: Arc<RedirectValidator>,
    pub federation: Arc<FederationGateway>,
    pub email_sender: Arc<dyn EmailSender>,
    pub audit_sink: Arc<dyn AuditSink>,
    pub rate_limiter: Arc<dyn RateLimiter>,
    pub session_policy: SessionPolicy,
    pub credential_policy: CredentialPolicy,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Arc<AppConfig>,
        store: Arc<dyn AuthStore>,
        hasher: Arc<dyn PasswordHasher>,
        signer: Arc<dyn TokenSigner>,
        minter: Arc<dyn TokenMinter>,
        clock: Arc<dyn Clock>,
        redirect_validator: Arc<RedirectValidator>,
        federation: Arc<FederationGateway>,
        email_sender: Arc<dyn EmailSender>,
        audit_sink: Arc<dyn AuditSink>,
        rate_limiter: Arc<dyn RateLimiter>,
        session_policy: SessionPolicy,
        credential_policy: CredentialPolicy,
    ) -> Self {
        Self {
            config,
            store,
            hasher,
            signer,
            minter,
            clock,
            redirect_validator,
            federation,
            email_sender,
            audit_sink,
            rate_limiter,
            session_policy,
            credential_policy,
        }
    }
}
