use std::sync::Arc;

use url::{Host, Url};

use crate::config::Environment;
use crate::core::error::{CoreError, ValidationError};
use crate::core::redirect::{matches_controlled_suffix, ValidatedRedirect, UNKNOWN_TENANT};
use crate::core::usecases::ports::DomainLookup;

/// Implements the redirect-validation rules in order: parse, scheme, IP
/// literal rejection, fragment rejection, controlled-suffix/domain-lookup
/// tenant resolution, origin serialization.
pub struct RedirectValidator {
    domain_lookup: Arc<dyn DomainLookup>,
    environment: Environment,
}

impl RedirectValidator {
    pub fn new(domain_lookup: Arc<dyn DomainLookup>, environment: Environment) -> Self {
        Self { domain_lookup, environment }
    }

    pub async fn validate(&self, candidate: &str) -> Result<ValidatedRedirect, CoreError> {
        let url = Url::parse(candidate).map_err(|_| ValidationError::InvalidRedirect)?;

        if url.fragment().is_some() {
            return Err(ValidationError::InvalidRedirect.into());
        }

        let host = url.host_str().ok_or(ValidationError::InvalidRedirect)?;
        let is_dev_localhost = matches!(host, "localhost" | "127.0.0.1");

        match url.scheme() {
            "https" => {}
            "http" if !self.environment.is_production() && is_dev_localhost => {}
            _ => return Err(ValidationError::InvalidRedirect.into()),
        }

        let dev_ip_exception = is_dev_localhost && url.scheme() == "http";
        if is_ip_literal(&url) && !dev_ip_exception {
            return Err(ValidationError::InvalidRedirect.into());
        }

        let looked_up = self.domain_lookup.lookup_tenant_by_domain(host).await;
        let tenant_id = if matches_controlled_suffix(host) {
            looked_up.unwrap_or_else(|| UNKNOWN_TENANT.to_string())
        } else {
            looked_up.ok_or(ValidationError::InvalidRedirect)?
        };

        Ok(ValidatedRedirect { origin: origin_of(&url), tenant_id })
    }
}

fn is_ip_literal(url: &Url) -> bool {
    matches!(url.host(), Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)))
}

fn origin_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeDomainLookup {
        known: Vec<(&'static str, &'static str)>,
    }

    #[async_trait]
    impl DomainLookup for FakeDomainLookup {
        async fn lookup_tenant_by_domain(&self, host: &str) -> Option<String> {
            self.known.iter().find(|(h, _)| *h == host).map(|(_, id)| id.to_string())
        }
    }

    fn validator(environment: Environment, known: Vec<(&'static str, &'static str)>) -> RedirectValidator {
        RedirectValidator::new(Arc::new(FakeDomainLookup { known }), environment)
    }

    #[tokio::test]
    async fn accepts_controlled_suffix_without_lookup() {
        let v = validator(Environment::Production, vec![]);
        let result = v.validate("https://store-a.centerpiece.shop/cart").await.unwrap();
        assert_eq!(result.origin, "https://store-a.centerpiece.shop");
        assert_eq!(result.tenant_id, UNKNOWN_TENANT);
    }

    #[tokio::test]
    async fn registered_domain_lookup_is_authoritative() {
        let v = validator(Environment::Production, vec![("shop.example.test", "tenant-42")]);
        let result = v.validate("https://shop.example.test/checkout").await.unwrap();
        assert_eq!(result.tenant_id, "tenant-42");
    }

    #[tokio::test]
    async fn rejects_unregistered_uncontrolled_host() {
        let v = validator(Environment::Production, vec![]);
        assert!(v.validate("https://evil.test/").await.is_err());
    }

    #[tokio::test]
    async fn rejects_javascript_scheme() {
        let v = validator(Environment::Development, vec![]);
        assert!(v.validate("javascript:alert(1)").await.is_err());
    }

    #[tokio::test]
    async fn rejects_fragment() {
        let v = validator(Environment::Production, vec![]);
        assert!(v.validate("https://a.centerpiece.shop/cart#frag").await.is_err());
    }

    #[tokio::test]
    async fn rejects_ip_literal_in_production() {
        let v = validator(Environment::Production, vec![]);
        assert!(v.validate("https://9.9.9.9/cart").await.is_err());
    }

    #[tokio::test]
    async fn accepts_dev_localhost_over_http() {
        let v = validator(Environment::Development, vec![("127.0.0.1", "dev-tenant")]);
        let result = v.validate("http://127.0.0.1:3000/cart").await.unwrap();
        assert_eq!(result.origin, "http://127.0.0.1:3000");
    }

    #[tokio::test]
    async fn rejects_http_outside_dev_localhost_even_in_dev() {
        let v = validator(Environment::Development, vec![("shop.example.test", "t1")]);
        assert!(v.validate("http://shop.example.test/cart").await.is_err());
    }
}
