use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,  // Can claim, unlink and delete their own QR codes
    Admin, // Can generate batches, print and delete any QR code
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    // Helper methods to check permissions
    pub fn can_claim_qr(&self) -> bool {
        matches!(self, Role::User)
    }

    pub fn can_delete_any_qr(&self) -> bool {
        self.is_admin()
    }
}
