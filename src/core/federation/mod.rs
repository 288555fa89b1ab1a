//! Domain vocabulary for third-party OAuth/OIDC sign-in: the transient
//! round-trip state record and the provider-agnostic normalized profile
//! shape every adapter reduces its provider response into.

pub mod federation_state;
pub mod normalized_profile;

pub use federation_state::{FederationState, ProviderName};
pub use normalized_profile::NormalizedProfile;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_name_round_trips_through_str() {
        for provider in [
            ProviderName::Google,
            ProviderName::Facebook,
            ProviderName::Apple,
            ProviderName::Microsoft,
        ] {
            let parsed: ProviderName = provider.as_str().parse().unwrap();
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn only_facebook_lacks_oidc_support() {
        assert!(!ProviderName::Facebook.supports_oidc());
        assert!(ProviderName::Google.supports_oidc());
        assert!(ProviderName::Apple.supports_oidc());
        assert!(ProviderName::Microsoft.supports_oidc());
    }
}
