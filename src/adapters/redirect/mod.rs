pub mod null_domain_lookup;
pub mod validator;

pub use null_domain_lookup::NullDomainLookup;
pub use validator::RedirectValidator;
