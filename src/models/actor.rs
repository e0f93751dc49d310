use crate::models::role::Role;

/// Whoever is performing the current operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    User(String),  // User ID
    Admin(String), // Admin username
}

impl Actor {
    /// The authenticated end user's ID, if any.
    pub fn current_user(&self) -> Option<&str> {
        match self {
            Actor::User(id) => Some(id),
            Actor::Anonymous | Actor::Admin(_) => None,
        }
    }

    pub fn current_role(&self) -> Option<Role> {
        match self {
            Actor::Anonymous => None,
            Actor::User(_) => Some(Role::User),
            Actor::Admin(_) => Some(Role::Admin),
        }
    }
}
