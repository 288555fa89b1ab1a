//! Core identity domain types.
//!
//! These modules define the vocabulary for users, tenant memberships, and
//! federated identity links. They intentionally avoid any persistence or
//! HTTP detail — those belong to adapters.

pub mod audience;
pub mod federated_identity;
pub mod identity_claims;
pub mod role;
pub mod tenant_membership;
pub mod user;

pub use audience::Audience;
pub use federated_identity::FederatedIdentity;
pub use identity_claims::IdentityClaims;
pub use role::{MembershipStatus, Role};
pub use tenant_membership::TenantMembership;
pub use user::User;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Customer, Role::Seller, Role::Supplier, Role::PlatformAdmin] {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn audience_round_trips_through_str() {
        for aud in [Audience::Storefront, Audience::Admin] {
            let parsed: Audience = aud.as_str().parse().unwrap();
            assert_eq!(parsed, aud);
        }
    }
}
