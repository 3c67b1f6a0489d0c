use serde::{Deserialize, Serialize};

use super::role::Role;

/// The signed-in principal, owned by the auth collaborator. The access gate
/// only reads `role`; nothing here is mutated by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub company_id: String,

    /// Present only if this user is linked to an employee record
    pub employee_id: Option<u64>,
}
