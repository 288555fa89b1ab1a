use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::identity::Audience;
use crate::core::token::{AuthorizationCode, IssuedAuthorizationCode, IssuedRefreshToken, RefreshToken};

use super::policies::SessionPolicy;
use super::ports::{AuthStore, Clock, TokenMinter};

/// Shared helper that mints a fresh refresh-token family and a bound
/// authorization code — the "mint refresh token + authorization code" step
/// that ends every successful authentication (spec §4.4: "produced at the
/// end of every successful authentication (password, federated, or
/// refresh)").
#[derive(Clone)]
pub struct SessionIssuer {
    store: Arc<dyn AuthStore>,
    minter: Arc<dyn TokenMinter>,
    clock: Arc<dyn Clock>,
    policy: SessionPolicy,
}

pub struct IssueSessionRequest {
    pub user_id: String,
    pub tenant_id: String,
    pub redirect_origin: String,
    pub audience: Audience,
    pub pkce_challenge: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug)]
pub struct IssuedSession {
    pub auth_code: IssuedAuthorizationCode,
    pub refresh_token: IssuedRefreshToken,
}

impl SessionIssuer {
    pub fn new(store: Arc<dyn AuthStore>, minter: Arc<dyn TokenMinter>, clock: Arc<dyn Clock>, policy: SessionPolicy) -> Self {
        Self { store, minter, clock, policy }
    }

    pub async fn issue(&self, req: IssueSessionRequest) -> Result<IssuedSession, CoreError> {
        let now = self.clock.now();

        let family_id = uuid::Uuid::new_v4().to_string();
        let refresh_plaintext = self.minter.random_hex(32);
        let refresh_expires_at = now + self.policy.refresh_token_ttl();
        self.store
            .insert_refresh_token(RefreshToken {
                id: uuid::Uuid::new_v4().to_string(),
                user_id: req.user_id.clone(),
                token_hash: self.minter.sha256_hex(&refresh_plaintext),
                family_id: family_id.clone(),
                expires_at: refresh_expires_at,
                revoked_at: None,
                last_used_at: None,
                created_at: now,
                ip_address: req.ip_address,
                user_agent: req.user_agent,
            })
            .await?;

        let code_plaintext = self.minter.random_hex(32);
        let code_expires_at = now + self.policy.auth_code_ttl();
        self.store
            .insert_auth_code(AuthorizationCode {
                code_hash: self.minter.sha256_hex(&code_plaintext),
                user_id: req.user_id,
                tenant_id: req.tenant_id,
                redirect_origin: req.redirect_origin,
                audience: req.audience,
                pkce_challenge: req.pkce_challenge,
                expires_at: code_expires_at,
                created_at: now,
            })
            .await?;

        Ok(IssuedSession {
            auth_code: IssuedAuthorizationCode { plaintext: code_plaintext, expires_at: code_expires_at },
            refresh_token: IssuedRefreshToken { plaintext: refresh_plaintext, family_id, expires_at: refresh_expires_at },
        })
    }
}
