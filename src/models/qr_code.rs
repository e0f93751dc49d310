use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::error::RegistryError;

/// Prefix of every printed QR identifier.
pub const UNIQUE_ID_PREFIX: &str = "SF";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QrStatus {
    Unclaimed,
    Claimed,
    Deleted,
}

impl QrStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrStatus::Unclaimed => "unclaimed",
            QrStatus::Claimed => "claimed",
            QrStatus::Deleted => "deleted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, QrStatus::Deleted)
    }
}

impl fmt::Display for QrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events a QR code can be subjected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrAction {
    Claim,
    Unlink,
    Delete,
    Print,
}

impl fmt::Display for QrAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrAction::Claim => write!(f, "claim"),
            QrAction::Unlink => write!(f, "unlink"),
            QrAction::Delete => write!(f, "delete"),
            QrAction::Print => write!(f, "print"),
        }
    }
}

/// Owner contact details copied onto the code when it is claimed.
///
/// This is a snapshot: later profile edits do not flow back into it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.whatsapp_link.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    pub unique_id: String, // The ID embedded in the printed QR, e.g. "SF000001"
    pub status: QrStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    pub created_at: i64, // Timestamp in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

/// Format a sequence number as a printable identifier (`SF` + six digits).
pub fn format_unique_id(sequence: u64) -> String {
    format!("{}{:06}", UNIQUE_ID_PREFIX, sequence)
}

impl QrCode {
    pub fn new(unique_id: String, batch_id: Option<String>, created_at: i64) -> Self {
        Self {
            unique_id,
            status: QrStatus::Unclaimed,
            owner_id: None,
            batch_id,
            created_at,
            claimed_at: None,
            contact_info: None,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id.as_deref() == Some(user_id)
    }

    fn reject(&self, action: QrAction) -> RegistryError {
        RegistryError::InvalidTransition {
            unique_id: self.unique_id.clone(),
            status: self.status,
            action,
        }
    }

    /// unclaimed -> claimed. Leaves the record untouched on failure.
    pub fn claim(
        &mut self,
        owner_id: &str,
        contact_info: ContactInfo,
        now: i64,
    ) -> Result<(), RegistryError> {
        match self.status {
            QrStatus::Unclaimed => {
                self.status = QrStatus::Claimed;
                self.owner_id = Some(owner_id.to_string());
                self.claimed_at = Some(now);
                self.contact_info = Some(contact_info);
                Ok(())
            }
            QrStatus::Claimed | QrStatus::Deleted => Err(self.reject(QrAction::Claim)),
        }
    }

    /// claimed -> unclaimed, clearing every ownership field.
    pub fn unlink(&mut self) -> Result<(), RegistryError> {
        match self.status {
            QrStatus::Claimed => {
                self.status = QrStatus::Unclaimed;
                self.owner_id = None;
                self.claimed_at = None;
                self.contact_info = None;
                Ok(())
            }
            QrStatus::Unclaimed | QrStatus::Deleted => Err(self.reject(QrAction::Unlink)),
        }
    }

    /// Any live state -> deleted. Ownership fields are frozen as they are.
    pub fn soft_delete(&mut self) -> Result<(), RegistryError> {
        match self.status {
            QrStatus::Unclaimed | QrStatus::Claimed => {
                self.status = QrStatus::Deleted;
                Ok(())
            }
            QrStatus::Deleted => Err(self.reject(QrAction::Delete)),
        }
    }

    pub fn ensure_printable(&self) -> Result<(), RegistryError> {
        if self.status.is_terminal() {
            return Err(self.reject(QrAction::Print));
        }
        Ok(())
    }

    /// Case-insensitive substring match over id, owner and status.
    pub fn matches_search(&self, needle_lowercase: &str) -> bool {
        self.unique_id.to_lowercase().contains(needle_lowercase)
            || self
                .owner_id
                .as_ref()
                .is_some_and(|owner| owner.to_lowercase().contains(needle_lowercase))
            || self.status.as_str().contains(needle_lowercase)
    }
}
