use super::audience::Audience;

/// Token-safe, data-only projection of an identity used to build JWT claims.
///
/// This is the bridge between the domain (`User`, `TenantMembership`) and
/// the JWT kernel: it carries exactly the fields spec §4.5 requires and
/// nothing else, so the signer cannot accidentally leak more than intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub aud: Audience,
    /// Only populated for `aud == Admin`.
    pub jti: Option<String>,
    /// Only populated for `aud == Admin`.
    pub primary_tenant_id: Option<Option<String>>,
    /// Only populated for `aud == Admin`.
    pub roles: Option<Vec<String>>,
}

impl IdentityClaims {
    /// Construct storefront claims — `jti`/`roles`/`primaryTenantId` absent.
    pub fn storefront(sub: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            email: email.into(),
            name: name.into(),
            aud: Audience::Storefront,
            jti: None,
            primary_tenant_id: None,
            roles: None,
        }
    }

    /// Construct admin claims — all three admin-only fields populated.
    pub fn admin(
        sub: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        jti: impl Into<String>,
        primary_tenant_id: Option<String>,
        roles: Vec<String>,
    ) -> Self {
        Self {
            sub: sub.into(),
            email: email.into(),
            name: name.into(),
            aud: Audience::Admin,
            jti: Some(jti.into()),
            primary_tenant_id: Some(primary_tenant_id),
            roles: Some(roles),
        }
    }
}
