/// Errors for "is membership or role present?" — distinct from authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    MembershipRequired { tenant_id: String },
    RoleNotPermitted { role: String },
}

impl std::fmt::Display for AuthorizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MembershipRequired { tenant_id } => {
                write!(f, "no membership at tenant {tenant_id}")
            }
            Self::RoleNotPermitted { role } => write!(f, "role {role} is not permitted here"),
        }
    }
}
