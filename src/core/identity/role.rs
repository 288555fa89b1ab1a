use std::fmt;

/// A role a user can hold at a tenant.
///
/// Only `Customer` may be auto-created by any flow in this crate (spec §3);
/// the other three require an explicit administrative action this crate
/// does not implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Seller,
    Supplier,
    PlatformAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Seller => "seller",
            Role::Supplier => "supplier",
            Role::PlatformAdmin => "platform_admin",
        }
    }

    pub fn is_customer(&self) -> bool {
        matches!(self, Role::Customer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "seller" => Ok(Role::Seller),
            "supplier" => Ok(Role::Supplier),
            "platform_admin" => Ok(Role::PlatformAdmin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Status of a tenant membership row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Suspended,
    Invited,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Suspended => "suspended",
            MembershipStatus::Invited => "invited",
        }
    }
}

impl std::str::FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MembershipStatus::Active),
            "suspended" => Ok(MembershipStatus::Suspended),
            "invited" => Ok(MembershipStatus::Invited),
            other => Err(format!("unknown membership status: {other}")),
        }
    }
}
