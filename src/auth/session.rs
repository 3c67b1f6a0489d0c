use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::guard::{self, AccessDecision};
use crate::model::role::Role;
use crate::model::user::User;

/// The signed-in state of one session (one browser tab, one user).
/// Persisting the user object across sessions is the auth collaborator's
/// job; this type only holds it while signed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user: User) {
        info!(user_id = %user.id, role = %user.role, "login");
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "logout");
        }
    }

    /// Apply a profile edit to the signed-in user, if any.
    pub fn update_profile(&mut self, edit: impl FnOnce(&mut User)) {
        if let Some(user) = self.user.as_mut() {
            edit(user);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Gate a route or feature against this session.
    pub fn decide(&self, required_role: Option<Role>) -> AccessDecision {
        guard::decide(self.is_authenticated(), self.role(), required_role)
    }
}
