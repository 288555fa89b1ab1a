use std::fmt;

/// The consumer class of an access token (spec glossary: Audience).
///
/// Governs which claims must be present: `Admin` tokens additionally carry
/// `jti`, `roles`, and `primaryTenantId`; `Storefront` tokens must never
/// carry any of the three (format-stability invariant, spec §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Storefront,
    Admin,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Storefront => "storefront",
            Audience::Admin => "admin",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "storefront" => Ok(Audience::Storefront),
            "admin" => Ok(Audience::Admin),
            other => Err(format!("unknown audience: {other}")),
        }
    }
}

impl Default for Audience {
    fn default() -> Self {
        Audience::Storefront
    }
}
