use std::sync::Arc;

use crate::core::error::{CoreError, StateError, UnexpectedError};
use crate::core::identity::{Audience, IdentityClaims};
use crate::core::token::AccessTokenClaims;
use crate::core::usecases::policies::SessionPolicy;
use crate::core::usecases::ports::{AuthStore, Clock, TokenMinter, TokenSigner};

pub struct ExchangeCodeInput {
    pub code: String,
    pub tenant_id: String,
    pub redirect_origin: String,
    pub code_verifier: Option<String>,
}

#[derive(Debug)]
pub struct ExchangeCodeOutput {
    pub access_token: String,
    pub expires_in: i64,
}

/// Final step of the token kernel (spec §4.4 code-exchange) feeding straight
/// into the JWT kernel (spec §4.5). User-visible rejection reasons are
/// deliberately coarse — "wrong tenant", "wrong origin" and "wrong code" are
/// all the same `StateError::AuthCodeInvalid` (spec §7).
pub struct ExchangeCode {
    store: Arc<dyn AuthStore>,
    minter: Arc<dyn TokenMinter>,
    signer: Arc<dyn TokenSigner>,
    clock: Arc<dyn Clock>,
    policy: SessionPolicy,
    auth_domain: String,
}

impl ExchangeCode {
    pub fn new(
        store: Arc<dyn AuthStore>,
        minter: Arc<dyn TokenMinter>,
        signer: Arc<dyn TokenSigner>,
        clock: Arc<dyn Clock>,
        policy: SessionPolicy,
        auth_domain: String,
    ) -> Self {
        Self { store, minter, signer, clock, policy, auth_domain }
    }

    pub async fn execute(&self, input: ExchangeCodeInput) -> Result<ExchangeCodeOutput, CoreError> {
        let code_hash = self.minter.sha256_hex(&input.code);
        let row = self.store.consume_auth_code(&code_hash).await?.ok_or(StateError::AuthCodeInvalid)?;

        let now = self.clock.now();
        if row.is_expired(now) {
            return Err(StateError::AuthCodeInvalid.into());
        }
        if row.tenant_id != input.tenant_id {
            return Err(StateError::AuthCodeInvalid.into());
        }
        if row.redirect_origin != input.redirect_origin {
            return Err(StateError::AuthCodeInvalid.into());
        }
        if let Some(stored_challenge) = &row.pkce_challenge {
            let verifier = input.code_verifier.ok_or(StateError::AuthCodeInvalid)?;
            if &self.minter.pkce_challenge(&verifier) != stored_challenge {
                return Err(StateError::AuthCodeInvalid.into());
            }
        }

        let user = self
            .store
            .find_user_by_id(&row.user_id)
            .await?
            .ok_or_else(|| UnexpectedError::new("authorization code referenced a nonexistent user"))?;

        let identity = match row.audience {
            Audience::Storefront => IdentityClaims::storefront(user.id.clone(), user.email.clone(), user.display_name.clone()),
            Audience::Admin => {
                let memberships = self.store.list_memberships(&user.id).await?;
                let primary = memberships
                    .iter()
                    .filter(|m| m.is_active() && !m.role.is_customer())
                    .min_by_key(|m| m.created_at);
                let primary_tenant_id = primary.map(|m| m.tenant_id.clone());
                let roles = match &primary_tenant_id {
                    Some(tenant_id) => memberships
                        .iter()
                        .filter(|m| &m.tenant_id == tenant_id)
                        .map(|m| m.role.to_string())
                        .collect(),
                    None => Vec::new(),
                };
                IdentityClaims::admin(
                    user.id.clone(),
                    user.email.clone(),
                    user.display_name.clone(),
                    uuid::Uuid::new_v4().to_string(),
                    primary_tenant_id,
                    roles,
                )
            }
        };

        let iat = now.timestamp();
        let exp = iat + self.policy.access_token_ttl_seconds;
        let claims = AccessTokenClaims::new(identity, self.auth_domain.clone(), iat, exp);
        let access_token = self.signer.sign(&claims)?;

        Ok(ExchangeCodeOutput { access_token, expires_in: self.policy.access_token_ttl_seconds })
    }
}
