use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::federation::{FederationState, ProviderName};
use crate::core::usecases::policies::SessionPolicy;
use crate::core::usecases::ports::{AuthStore, Clock, TokenMinter};

/// Redirect validation happens upstream; provider-configuration presence
/// (spec §4.7 step 1) is checked by the handler before this runs.
pub struct OAuthInitiateInput {
    pub provider: ProviderName,
    pub tenant_id: String,
    pub redirect_url: String,
}

pub struct OAuthInitiateOutput {
    pub state: String,
    pub code_verifier: String,
    pub code_challenge: String,
    pub nonce: Option<String>,
}

/// `GET /oauth/<provider>` steps 3 (spec §4.7): mint and persist the
/// transient round-trip record. Constructing the provider authorization URL
/// from this output is adapter-specific and happens one layer up.
pub struct OAuthInitiate {
    store: Arc<dyn AuthStore>,
    minter: Arc<dyn TokenMinter>,
    clock: Arc<dyn Clock>,
    policy: SessionPolicy,
}

impl OAuthInitiate {
    pub fn new(store: Arc<dyn AuthStore>, minter: Arc<dyn TokenMinter>, clock: Arc<dyn Clock>, policy: SessionPolicy) -> Self {
        Self { store, minter, clock, policy }
    }

    pub async fn execute(&self, input: OAuthInitiateInput) -> Result<OAuthInitiateOutput, CoreError> {
        let state = self.minter.random_hex(32);
        let code_verifier = self.minter.random_base64url(32);
        let code_challenge = self.minter.pkce_challenge(&code_verifier);
        let nonce = input.provider.supports_oidc().then(|| self.minter.random_hex(16));

        let now = self.clock.now();
        self.store
            .insert_federation_state(FederationState {
                state: state.clone(),
                tenant_id: input.tenant_id,
                redirect_url: input.redirect_url,
                code_verifier: code_verifier.clone(),
                nonce: nonce.clone(),
                provider: input.provider,
                expires_at: now + self.policy.federation_state_ttl(),
            })
            .await?;

        Ok(OAuthInitiateOutput { state, code_verifier, code_challenge, nonce })
    }
}
