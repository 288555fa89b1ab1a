//! End-to-end exercises of the session kernel (register/login → exchange,
//! refresh rotation with reuse detection) against the in-memory fakes in
//! [`super::test_support`]. Each test wires its own `Arc`s the same way
//! `main.rs` wires the real adapters, just with fakes standing in for
//! Postgres and the crypto adapters.

#![cfg(test)]

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::core::credentials::CredentialPolicy;
use crate::core::error::{CoreError, StateError};
use crate::core::identity::Audience;
use crate::core::usecases::policies::SessionPolicy;
use crate::core::usecases::ports::{AuthStore, TokenMinter};
use crate::core::usecases::session_issuer::SessionIssuer;
use crate::core::usecases::test_support::{CountingTokenMinter, FakeTokenSigner, FixedClock, InMemoryAuthStore, PlaintextPasswordHasher};
use crate::core::usecases::{
    ExchangeCode, ExchangeCodeInput, LoginInput, LoginUser, RefreshSession, RefreshSessionInput, RegisterInput, RegisterUser,
    RevokeSession, RevokeSessionInput,
};

fn harness() -> (Arc<InMemoryAuthStore>, Arc<CountingTokenMinter>, Arc<FixedClock>, Arc<FakeTokenSigner>, SessionPolicy) {
    let store = Arc::new(InMemoryAuthStore::default());
    let minter = Arc::new(CountingTokenMinter::default());
    let clock = Arc::new(FixedClock(Utc::now()));
    let signer = Arc::new(FakeTokenSigner);
    let policy = SessionPolicy::default();
    (store, minter, clock, signer, policy)
}

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_string(),
        password: "correct horse battery staple".to_string(),
        confirm_password: "correct horse battery staple".to_string(),
        name: None,
        tenant_id: "store-a".to_string(),
        redirect_origin: "https://store-a.centerpiece.shop".to_string(),
        audience: Audience::Storefront,
        pkce_challenge: None,
        ip_address: None,
        user_agent: None,
    }
}

#[tokio::test]
async fn register_then_exchange_yields_storefront_token() {
    let (store, minter, clock, signer, policy) = harness();
    let issuer = SessionIssuer::new(store.clone(), minter.clone(), clock.clone(), policy);
    let register = RegisterUser::new(store.clone(), Arc::new(PlaintextPasswordHasher), issuer, CredentialPolicy::default());

    let output = register.execute(register_input("shopper@example.test")).await.unwrap();

    let exchange = ExchangeCode::new(store, minter, signer, clock, policy, "auth.centerpiece.shop".to_string());
    let result = exchange
        .execute(ExchangeCodeInput {
            code: output.session.auth_code.plaintext,
            tenant_id: "store-a".to_string(),
            redirect_origin: "https://store-a.centerpiece.shop".to_string(),
            code_verifier: None,
        })
        .await
        .unwrap();

    assert_eq!(result.expires_in, policy.access_token_ttl_seconds);
    assert!(result.access_token.contains("\"aud\":\"storefront\""));
}

#[tokio::test]
async fn exchange_rejects_code_bound_to_a_different_tenant() {
    let (store, minter, clock, signer, policy) = harness();
    let issuer = SessionIssuer::new(store.clone(), minter.clone(), clock.clone(), policy);
    let register = RegisterUser::new(store.clone(), Arc::new(PlaintextPasswordHasher), issuer, CredentialPolicy::default());
    let output = register.execute(register_input("shopper2@example.test")).await.unwrap();

    let exchange = ExchangeCode::new(store, minter, signer, clock, policy, "auth.centerpiece.shop".to_string());
    let err = exchange
        .execute(ExchangeCodeInput {
            code: output.session.auth_code.plaintext,
            tenant_id: "store-b".to_string(),
            redirect_origin: "https://store-a.centerpiece.shop".to_string(),
            code_verifier: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::State(StateError::AuthCodeInvalid)));
}

#[tokio::test]
async fn exchange_rejects_mismatched_pkce_verifier() {
    let (store, minter, clock, signer, policy) = harness();
    let issuer = SessionIssuer::new(store.clone(), minter.clone(), clock.clone(), policy);
    let mut input = register_input("shopper3@example.test");
    input.pkce_challenge = Some(minter.pkce_challenge("verifier-abc"));
    let register = RegisterUser::new(store.clone(), Arc::new(PlaintextPasswordHasher), issuer, CredentialPolicy::default());
    let output = register.execute(input).await.unwrap();

    let exchange = ExchangeCode::new(store, minter, signer, clock, policy, "auth.centerpiece.shop".to_string());
    let err = exchange
        .execute(ExchangeCodeInput {
            code: output.session.auth_code.plaintext,
            tenant_id: "store-a".to_string(),
            redirect_origin: "https://store-a.centerpiece.shop".to_string(),
            code_verifier: Some("wrong-verifier".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::State(StateError::AuthCodeInvalid)));
}

#[tokio::test]
async fn login_rejects_wrong_password_without_revealing_which_check_failed() {
    let (store, minter, clock, signer, policy) = harness();
    let issuer = SessionIssuer::new(store.clone(), minter.clone(), clock.clone(), policy);
    let register = RegisterUser::new(store.clone(), Arc::new(PlaintextPasswordHasher), issuer.clone(), CredentialPolicy::default());
    register.execute(register_input("shopper4@example.test")).await.unwrap();
    let _ = signer;

    let login_issuer = SessionIssuer::new(store.clone(), minter, clock, policy);
    let login = LoginUser::new(store, Arc::new(PlaintextPasswordHasher), login_issuer);
    let err = login
        .execute(LoginInput {
            email: "shopper4@example.test".to_string(),
            password: "totally-wrong".to_string(),
            tenant_id: "store-a".to_string(),
            redirect_origin: "https://store-a.centerpiece.shop".to_string(),
            audience: Audience::Storefront,
            pkce_challenge: None,
            ip_address: None,
            user_agent: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Authentication(_)));
}

#[tokio::test]
async fn refresh_rotation_then_reuse_of_the_old_token_revokes_the_whole_family() {
    let (store, minter, clock, signer, policy) = harness();
    let _ = signer;
    let issuer = SessionIssuer::new(store.clone(), minter.clone(), clock.clone(), policy);
    let register = RegisterUser::new(store.clone(), Arc::new(PlaintextPasswordHasher), issuer, CredentialPolicy::default());
    let output = register.execute(register_input("shopper5@example.test")).await.unwrap();
    let old_plaintext = output.session.refresh_token.plaintext.clone();

    let refresh = RefreshSession::new(store.clone(), minter.clone(), clock.clone(), policy);
    let rotated = refresh
        .execute(RefreshSessionInput {
            presented_refresh_token: old_plaintext.clone(),
            tenant_id: "store-a".to_string(),
            redirect_origin: "https://store-a.centerpiece.shop".to_string(),
            audience: Audience::Storefront,
        })
        .await
        .unwrap();
    assert_ne!(rotated.refresh_token.plaintext, old_plaintext);

    // Reusing the now-revoked old token must fail and take the new token down with it.
    let reuse_err = refresh
        .execute(RefreshSessionInput {
            presented_refresh_token: old_plaintext,
            tenant_id: "store-a".to_string(),
            redirect_origin: "https://store-a.centerpiece.shop".to_string(),
            audience: Audience::Storefront,
        })
        .await
        .unwrap_err();
    assert!(matches!(reuse_err, CoreError::State(StateError::SessionExpired)));

    let new_token_hash = minter.sha256_hex(&rotated.refresh_token.plaintext);
    let new_token = store.find_refresh_token_by_hash(&new_token_hash).await.unwrap().unwrap();
    assert!(new_token.is_revoked());
}

#[tokio::test]
async fn refresh_rejects_an_expired_token() {
    let (store, minter, clock, signer, policy) = harness();
    let _ = signer;
    let issuer = SessionIssuer::new(store.clone(), minter.clone(), clock.clone(), policy);
    let register = RegisterUser::new(store.clone(), Arc::new(PlaintextPasswordHasher), issuer, CredentialPolicy::default());
    let output = register.execute(register_input("shopper6@example.test")).await.unwrap();

    let later = Arc::new(FixedClock(clock.0 + Duration::days(policy.refresh_token_ttl_days + 1)));
    let refresh = RefreshSession::new(store, minter, later, policy);
    let err = refresh
        .execute(RefreshSessionInput {
            presented_refresh_token: output.session.refresh_token.plaintext,
            tenant_id: "store-a".to_string(),
            redirect_origin: "https://store-a.centerpiece.shop".to_string(),
            audience: Audience::Storefront,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::State(StateError::SessionExpired)));
}

#[tokio::test]
async fn logout_all_revokes_every_family_for_the_user() {
    let (store, minter, clock, signer, policy) = harness();
    let _ = signer;
    let issuer = SessionIssuer::new(store.clone(), minter.clone(), clock.clone(), policy);
    let register = RegisterUser::new(store.clone(), Arc::new(PlaintextPasswordHasher), issuer.clone(), CredentialPolicy::default());
    let output = register.execute(register_input("shopper7@example.test")).await.unwrap();

    // A second session for the same user, as if logged in from another device.
    let second_session = issuer
        .issue(crate::core::usecases::IssueSessionRequest {
            user_id: output.user_id.clone(),
            tenant_id: "store-a".to_string(),
            redirect_origin: "https://store-a.centerpiece.shop".to_string(),
            audience: Audience::Storefront,
            pkce_challenge: None,
            ip_address: None,
            user_agent: None,
        })
        .await
        .unwrap();

    let revoke = RevokeSession::new(store.clone(), minter.clone());
    revoke
        .logout_all(RevokeSessionInput { presented_refresh_token: output.session.refresh_token.plaintext })
        .await
        .unwrap();

    let second_hash = minter.sha256_hex(&second_session.refresh_token.plaintext);
    let second_row = store.find_refresh_token_by_hash(&second_hash).await.unwrap().unwrap();
    assert!(second_row.is_revoked());
}
