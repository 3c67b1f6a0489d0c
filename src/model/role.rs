use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    Manager,
    Employee,
}

impl Role {
    /// Parse a role name as stored by the auth collaborator. Anything
    /// outside the known set yields `None`; callers treat that as
    /// insufficient privilege, never as something worth crashing on.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Whether this role meets a requirement. Admin satisfies everything;
    /// hr, manager and employee are siblings and satisfy only themselves.
    pub fn satisfies(self, required: Role) -> bool {
        self == Role::Admin || self == required
    }
}
