use crate::models::qr_batch::QrBatch;
use crate::models::qr_code::QrCode;
use crate::models::user::User;

/// Record storage behind the registry.
///
/// Implementations only store and scan; every lifecycle rule lives in
/// `QrRegistry`, which also serialises access, so methods take plain
/// `&self` / `&mut self`.
pub trait Store: Send + Sync {
    /// Append freshly generated codes. Unique IDs are already allocated.
    fn append_codes(&mut self, codes: Vec<QrCode>);

    fn append_batch(&mut self, batch: QrBatch);

    fn find_by_unique_id(&self, unique_id: &str) -> Option<QrCode>;

    /// Codes whose `batch_id` points at the given batch, in creation order.
    fn find_by_batch(&self, batch_id: &str) -> Vec<QrCode>;

    /// Codes whose `owner_id` is the given user, whatever their status.
    fn find_by_owner(&self, owner_id: &str) -> Vec<QrCode>;

    /// Overwrite a stored code with the same `unique_id`. Returns false when
    /// no such code exists.
    fn replace_code(&mut self, code: QrCode) -> bool;

    fn codes(&self) -> Vec<QrCode>;

    fn find_batch(&self, batch_id: &str) -> Option<QrBatch>;

    fn batches(&self) -> Vec<QrBatch>;

    fn batch_count(&self) -> usize;

    fn insert_user(&mut self, user: User);

    fn find_user(&self, user_id: &str) -> Option<User>;

    /// Email lookup, case-insensitive.
    fn find_user_by_email(&self, email: &str) -> Option<User>;

    /// Overwrite a stored user with the same `id`. Returns false when no such
    /// user exists.
    fn replace_user(&mut self, user: User) -> bool;
}

/// Vector-backed store; every query is a linear scan.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    codes: Vec<QrCode>,
    batches: Vec<QrBatch>,
    users: Vec<User>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemoryStore {
    fn append_codes(&mut self, codes: Vec<QrCode>) {
        self.codes.extend(codes);
    }

    fn append_batch(&mut self, batch: QrBatch) {
        self.batches.push(batch);
    }

    fn find_by_unique_id(&self, unique_id: &str) -> Option<QrCode> {
        self.codes
            .iter()
            .find(|qr| qr.unique_id == unique_id)
            .cloned()
    }

    fn find_by_batch(&self, batch_id: &str) -> Vec<QrCode> {
        self.codes
            .iter()
            .filter(|qr| qr.batch_id.as_deref() == Some(batch_id))
            .cloned()
            .collect()
    }

    fn find_by_owner(&self, owner_id: &str) -> Vec<QrCode> {
        self.codes
            .iter()
            .filter(|qr| qr.is_owned_by(owner_id))
            .cloned()
            .collect()
    }

    fn replace_code(&mut self, code: QrCode) -> bool {
        match self
            .codes
            .iter_mut()
            .find(|qr| qr.unique_id == code.unique_id)
        {
            Some(slot) => {
                *slot = code;
                true
            }
            None => false,
        }
    }

    fn codes(&self) -> Vec<QrCode> {
        self.codes.clone()
    }

    fn find_batch(&self, batch_id: &str) -> Option<QrBatch> {
        self.batches.iter().find(|b| b.id == batch_id).cloned()
    }

    fn batches(&self) -> Vec<QrBatch> {
        self.batches.clone()
    }

    fn batch_count(&self) -> usize {
        self.batches.len()
    }

    fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    fn find_user(&self, user_id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == user_id).cloned()
    }

    fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    fn replace_user(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }
}
