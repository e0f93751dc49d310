use serde::{Deserialize, Serialize};

use crate::models::qr_code::ContactInfo;
use crate::models::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
    pub password_hash: String,
    pub role: Role,
    // Unique IDs of claimed codes; mirrors QrCode.owner_id and is rewritten
    // together with it on every claim, unlink and delete.
    pub linked_qr_codes: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Partial profile update; `None` leaves a field unchanged. A blank `phone` or
/// `whatsapp_link` removes the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp_link: Option<String>,
}

// Blank contact fields are stored as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl User {
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        phone: Option<String>,
        whatsapp_link: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().timestamp_millis();

        Self {
            id: nanoid::nanoid!(10),
            name,
            email,
            phone: non_blank(phone),
            whatsapp_link: non_blank(whatsapp_link),
            password_hash,
            role: Role::User,
            linked_qr_codes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy of the contact fields as they are right now.
    pub fn contact_snapshot(&self) -> ContactInfo {
        ContactInfo {
            email: Some(self.email.clone()),
            phone: self.phone.clone(),
            whatsapp_link: self.whatsapp_link.clone(),
        }
    }

    pub fn link_qr(&mut self, unique_id: &str) {
        if !self.linked_qr_codes.iter().any(|id| id == unique_id) {
            self.linked_qr_codes.push(unique_id.to_string());
        }
    }

    pub fn unlink_qr(&mut self, unique_id: &str) {
        self.linked_qr_codes.retain(|id| id != unique_id);
    }

    pub fn apply_patch(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = non_blank(Some(phone));
        }
        if let Some(whatsapp_link) = patch.whatsapp_link {
            self.whatsapp_link = non_blank(Some(whatsapp_link));
        }
        self.updated_at = chrono::Utc::now().timestamp_millis();
    }
}

// For API responses - stripped of sensitive data
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub whatsapp_link: Option<String>,
    pub role: Role,
    pub linked_qr_codes: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            whatsapp_link: user.whatsapp_link,
            role: user.role,
            linked_qr_codes: user.linked_qr_codes,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
