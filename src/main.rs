//! Process entry point: loads configuration, wires every port to its
//! production adapter, and serves the HTTP API (spec §6).

mod adapters;
mod config;
mod core;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use adapters::audit::TracingAuditSink;
use adapters::crypto::{CryptoTokenMinter, Es256TokenSigner, Pbkdf2PasswordHasher};
use adapters::email::LoggingEmailSender;
use adapters::http::{create_router, AppState};
use adapters::oauth::FederationGateway;
use adapters::persistence::{Database, PgAuthStore, PoolConfig};
use adapters::ratelimit::FixedWindowRateLimiter;
use adapters::redirect::{NullDomainLookup, RedirectValidator};
use config::AppConfig;
use core::credentials::CredentialPolicy;
use core::usecases::policies::SessionPolicy;
use core::usecases::ports::{AuthStore, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))).init();

    let config = Arc::new(AppConfig::load()?);

    let database = Database::new(&config.database_url, PoolConfig::default()).await?;
    let store: Arc<dyn AuthStore> = Arc::new(PgAuthStore::new(database));

    let signer = Arc::new(Es256TokenSigner::new(&config.jwt_private_key_pem, &config.jwt_public_key_pem, config.jwt_kid.clone())?);
    let hasher = Arc::new(Pbkdf2PasswordHasher::default());
    let minter = Arc::new(CryptoTokenMinter);
    let clock = Arc::new(SystemClock);
    let redirect_validator = Arc::new(RedirectValidator::new(Arc::new(NullDomainLookup), config.environment));
    let federation = Arc::new(FederationGateway::new(&config));
    let email_sender = Arc::new(LoggingEmailSender);
    let audit_sink = Arc::new(TracingAuditSink);
    let rate_limiter = Arc::new(FixedWindowRateLimiter::new());

    let session_policy = SessionPolicy {
        access_token_ttl_seconds: config.access_token_ttl_seconds,
        refresh_token_ttl_days: config.refresh_token_ttl_days,
        auth_code_ttl_seconds: config.auth_code_ttl_seconds,
        ..SessionPolicy::default()
    };
    let credential_policy = CredentialPolicy::default();

    let state = AppState::new(
        config,
        store.clone(),
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
    );

    tokio::spawn(sweep_expired_records(store));

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}

/// Expired authorization codes and federation states are harmless if left
/// in place (every read path already checks expiry) but would otherwise
/// grow the tables forever, so a background sweep reclaims them hourly.
async fn sweep_expired_records(store: Arc<dyn AuthStore>) {
    let mut interval = tokio::time::interval(Duration::from_secs(3600));
    loop {
        interval.tick().await;
        match store.sweep_expired_auth_codes().await {
            Ok(n) if n > 0 => tracing::info!(count = n, "swept expired authorization codes"),
            Ok(_) => {}
            Err(err) => tracing::warn!(%err, "failed to sweep expired authorization codes"),
        }
        match store.sweep_expired_federation_states().await {
            Ok(n) if n > 0 => tracing::info!(count = n, "swept expired federation states"),
            Ok(_) => {}
            Err(err) => tracing::warn!(%err, "failed to sweep expired federation states"),
        }
    }
}
