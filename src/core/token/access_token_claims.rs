use serde::{Deserialize, Serialize};

use crate::core::identity::{Audience, IdentityClaims};

/// Wire shape of an access token's JWT payload (spec §4.5 / §6).
///
/// `jti`, `roles`, and `primary_tenant_id` are skipped entirely when absent
/// rather than serialized as `null` — storefront tokens must contain none
/// of the three keys, not merely null values for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub aud: Audience,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none", rename = "jti")]
    pub jti: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "primaryTenantId",
        default
    )]
    pub primary_tenant_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "roles", default)]
    pub roles: Option<Vec<String>>,
}

impl AccessTokenClaims {
    pub fn new(identity: IdentityClaims, issuer: impl Into<String>, issued_at: i64, expires_at: i64) -> Self {
        Self {
            sub: identity.sub,
            email: identity.email,
            name: identity.name,
            aud: identity.aud,
            iss: issuer.into(),
            iat: issued_at,
            exp: expires_at,
            jti: identity.jti,
            primary_tenant_id: identity.primary_tenant_id,
            roles: identity.roles,
        }
    }

    pub fn is_storefront_shape(&self) -> bool {
        matches!(self.aud, Audience::Storefront)
            && self.jti.is_none()
            && self.primary_tenant_id.is_none()
            && self.roles.is_none()
    }

    pub fn is_admin_shape(&self) -> bool {
        matches!(self.aud, Audience::Admin)
            && self.jti.is_some()
            && self.primary_tenant_id.is_some()
            && self.roles.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_claims_omit_admin_only_fields_in_json() {
        let identity = IdentityClaims::storefront("user-1", "a@b.test", "A");
        let claims = AccessTokenClaims::new(identity, "https://auth.test", 0, 900);
        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("jti"));
        assert!(!json.contains("roles"));
        assert!(!json.contains("primaryTenantId"));
        assert!(claims.is_storefront_shape());
    }

    #[test]
    fn admin_claims_carry_all_three_fields() {
        let identity = IdentityClaims::admin("user-1", "a@b.test", "A", "jti-1", None, vec![]);
        let claims = AccessTokenClaims::new(identity, "https://auth.test", 0, 900);
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"jti\""));
        assert!(json.contains("\"roles\""));
        assert!(json.contains("\"primaryTenantId\""));
        assert!(claims.is_admin_shape());
    }
}
