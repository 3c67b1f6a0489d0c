use tracing::debug;

use crate::model::role::Role;

/// Outcome of an authorization check. The caller performs the actual
/// navigation; this crate never redirects anything itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AccessDecision {
    Allow,
    DenyRedirectToLogin,
    DenyRedirectToDashboard,
}

/// The single route/feature gate. Pure and total: every combination of
/// inputs maps to a decision, never an error.
///
/// `user_role` is `None` when the session carries a role name outside the
/// known set; that counts as insufficient privilege whenever a role is
/// required. Admin satisfies any requirement; no other hierarchy exists.
pub fn decide(
    is_authenticated: bool,
    user_role: Option<Role>,
    required_role: Option<Role>,
) -> AccessDecision {
    if !is_authenticated {
        return AccessDecision::DenyRedirectToLogin;
    }
    if let Some(required) = required_role {
        let satisfied = user_role.map(|role| role.satisfies(required)).unwrap_or(false);
        if !satisfied {
            debug!(user_role = ?user_role, required = %required, "insufficient role");
            return AccessDecision::DenyRedirectToDashboard;
        }
    }
    AccessDecision::Allow
}
