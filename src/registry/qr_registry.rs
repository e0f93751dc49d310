use chrono::Utc;
use log::{info, warn};
use tokio::sync::RwLock;

use crate::models::actor::Actor;
use crate::models::qr_batch::QrBatch;
use crate::models::qr_code::{QrCode, QrStatus, UNIQUE_ID_PREFIX, format_unique_id};
use crate::models::user::{ProfilePatch, User};
use crate::registry::error::RegistryError;
use crate::registry::store::{InMemoryStore, Store};

/// Largest batch a single `generate_batch` call may allocate.
pub const MAX_BATCH_SIZE: i64 = 10_000;

struct Inner {
    store: Box<dyn Store>,
    // Next numeric suffix to hand out. Only ever incremented.
    next_sequence: u64,
}

/// In-memory registry of QR codes, batches and users.
///
/// One write lock covers the store and the ID sequence, so batch generation
/// and every claim/unlink/delete run to completion without interleaving.
pub struct QrRegistry {
    inner: RwLock<Inner>,
}

impl Default for QrRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRegistry {
    pub fn new() -> Self {
        Self::with_store(Box::new(InMemoryStore::new()))
    }

    /// Wrap an existing store, continuing the sequence after its highest ID.
    pub fn with_store(store: Box<dyn Store>) -> Self {
        let highest = store
            .codes()
            .iter()
            .filter_map(|qr| qr.unique_id.strip_prefix(UNIQUE_ID_PREFIX))
            .filter_map(|digits| digits.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            inner: RwLock::new(Inner {
                store,
                next_sequence: highest + 1,
            }),
        }
    }

    /// Allocate `count` new unclaimed codes and record them as one batch.
    pub async fn generate_batch(&self, count: i64) -> Result<QrBatch, RegistryError> {
        if count <= 0 {
            return Err(RegistryError::Validation(
                "batch size must be greater than 0".to_string(),
            ));
        }
        if count > MAX_BATCH_SIZE {
            return Err(RegistryError::Validation(format!(
                "batch size must not exceed {}",
                MAX_BATCH_SIZE
            )));
        }
        let count = count as u64;

        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let created_at = now.timestamp_millis();
        let existing = inner.store.batch_count();
        let batch_id = QrBatch::id_for(existing);

        let first = inner.next_sequence;
        let last = first
            .checked_add(count - 1)
            .filter(|last| *last < u64::MAX)
            .ok_or_else(|| RegistryError::Validation("QR code sequence exhausted".to_string()))?;
        let codes: Vec<QrCode> = (first..=last)
            .map(|seq| QrCode::new(format_unique_id(seq), Some(batch_id.clone()), created_at))
            .collect();
        inner.next_sequence = last + 1;

        let batch = QrBatch {
            id: batch_id,
            name: QrBatch::name_for(&now.format("%Y-%m-%d").to_string(), existing),
            count,
            start_id: format_unique_id(first),
            end_id: format_unique_id(last),
            created_at,
        };

        inner.store.append_codes(codes);
        inner.store.append_batch(batch.clone());

        info!(
            "Generated {} ({}) with {} codes: {} to {}",
            batch.id, batch.name, batch.count, batch.start_id, batch.end_id
        );
        Ok(batch)
    }

    pub async fn find(&self, unique_id: &str) -> Result<QrCode, RegistryError> {
        self.inner
            .read()
            .await
            .store
            .find_by_unique_id(unique_id)
            .ok_or_else(|| RegistryError::qr_not_found(unique_id))
    }

    /// Link an unclaimed code to the acting user, snapshotting their contact info.
    pub async fn claim(&self, unique_id: &str, actor: &Actor) -> Result<QrCode, RegistryError> {
        let user_id = actor
            .current_user()
            .filter(|_| actor.current_role().is_some_and(|role| role.can_claim_qr()))
            .ok_or_else(|| {
                RegistryError::Authorization("sign in as a user to claim QR codes".to_string())
            })?;

        let mut inner = self.inner.write().await;
        let mut qr = inner
            .store
            .find_by_unique_id(unique_id)
            .ok_or_else(|| RegistryError::qr_not_found(unique_id))?;
        let mut user = inner
            .store
            .find_user(user_id)
            .ok_or_else(|| RegistryError::user_not_found(user_id))?;

        if let Err(e) = qr.claim(&user.id, user.contact_snapshot(), Utc::now().timestamp_millis()) {
            warn!("Rejected claim of {} by {}: {}", unique_id, user_id, e);
            return Err(e);
        }
        user.link_qr(unique_id);

        commit(inner.store.as_mut(), qr.clone(), Some(user))?;
        info!("QR code {} claimed by {}", unique_id, user_id);
        Ok(qr)
    }

    /// Return a claimed code to the pool. Only its owner may do this.
    pub async fn unlink(&self, unique_id: &str, actor: &Actor) -> Result<QrCode, RegistryError> {
        let user_id = actor.current_user().ok_or_else(|| {
            RegistryError::Authorization("only the owner can unlink a QR code".to_string())
        })?;

        let mut inner = self.inner.write().await;
        let mut qr = inner
            .store
            .find_by_unique_id(unique_id)
            .ok_or_else(|| RegistryError::qr_not_found(unique_id))?;

        if qr.status == QrStatus::Claimed && !qr.is_owned_by(user_id) {
            warn!("Rejected unlink of {} by non-owner {}", unique_id, user_id);
            return Err(RegistryError::Authorization(format!(
                "{} is not linked to your account",
                unique_id
            )));
        }
        if let Err(e) = qr.unlink() {
            warn!("Rejected unlink of {} by {}: {}", unique_id, user_id, e);
            return Err(e);
        }

        let mut user = inner.store.find_user(user_id);
        if let Some(user) = user.as_mut() {
            user.unlink_qr(unique_id);
        }

        commit(inner.store.as_mut(), qr.clone(), user)?;
        info!("QR code {} unlinked by {}", unique_id, user_id);
        Ok(qr)
    }

    /// Soft-delete a code. Owners may delete their own codes, admins any code.
    pub async fn delete(&self, unique_id: &str, actor: &Actor) -> Result<QrCode, RegistryError> {
        let mut inner = self.inner.write().await;
        let mut qr = inner
            .store
            .find_by_unique_id(unique_id)
            .ok_or_else(|| RegistryError::qr_not_found(unique_id))?;

        let permitted = match actor {
            Actor::Admin(_) => actor.current_role().is_some_and(|r| r.can_delete_any_qr()),
            Actor::User(id) => qr.is_owned_by(id),
            Actor::Anonymous => false,
        };
        if !qr.status.is_terminal() && !permitted {
            warn!("Rejected delete of {} by {:?}", unique_id, actor);
            return Err(RegistryError::Authorization(format!(
                "you cannot delete {}",
                unique_id
            )));
        }

        let was_claimed = qr.status == QrStatus::Claimed;
        if let Err(e) = qr.soft_delete() {
            warn!("Rejected delete of {}: {}", unique_id, e);
            return Err(e);
        }

        let mut owner = match (&qr.owner_id, was_claimed) {
            (Some(owner_id), true) => inner.store.find_user(owner_id),
            _ => None,
        };
        if let Some(owner) = owner.as_mut() {
            owner.unlink_qr(unique_id);
        }

        commit(inner.store.as_mut(), qr.clone(), owner)?;
        info!("QR code {} deleted by {:?}", unique_id, actor);
        Ok(qr)
    }

    pub async fn codes_owned_by(&self, owner_id: &str, status: QrStatus) -> Vec<QrCode> {
        self.inner
            .read()
            .await
            .store
            .find_by_owner(owner_id)
            .into_iter()
            .filter(|qr| qr.status == status)
            .collect()
    }

    /// Members of a batch that can still be printed (everything not deleted).
    pub async fn printable_batch_members(
        &self,
        batch_id: &str,
    ) -> Result<Vec<QrCode>, RegistryError> {
        let inner = self.inner.read().await;
        if inner.store.find_batch(batch_id).is_none() {
            return Err(RegistryError::batch_not_found(batch_id));
        }
        Ok(inner
            .store
            .find_by_batch(batch_id)
            .into_iter()
            .filter(|qr| !qr.status.is_terminal())
            .collect())
    }

    /// Administrative search over unique ID, owner ID and status.
    pub async fn search(&self, term: &str) -> Vec<QrCode> {
        let needle = term.trim().to_lowercase();
        let codes = self.inner.read().await.store.codes();
        if needle.is_empty() {
            return codes;
        }
        codes
            .into_iter()
            .filter(|qr| qr.matches_search(&needle))
            .collect()
    }

    pub async fn list_codes(&self) -> Vec<QrCode> {
        self.inner.read().await.store.codes()
    }

    pub async fn list_batches(&self) -> Vec<QrBatch> {
        self.inner.read().await.store.batches()
    }

    pub async fn find_batch(&self, batch_id: &str) -> Result<QrBatch, RegistryError> {
        self.inner
            .read()
            .await
            .store
            .find_batch(batch_id)
            .ok_or_else(|| RegistryError::batch_not_found(batch_id))
    }

    pub async fn register_user(&self, user: User) -> Result<User, RegistryError> {
        let mut inner = self.inner.write().await;
        if inner.store.find_user_by_email(&user.email).is_some() {
            return Err(RegistryError::Validation(
                "an account with this email already exists".to_string(),
            ));
        }
        inner.store.insert_user(user.clone());
        info!("Registered user {}", user.id);
        Ok(user)
    }

    pub async fn find_user(&self, user_id: &str) -> Result<User, RegistryError> {
        self.inner
            .read()
            .await
            .store
            .find_user(user_id)
            .ok_or_else(|| RegistryError::user_not_found(user_id))
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.inner.read().await.store.find_user_by_email(email)
    }

    /// Update profile fields. Contact snapshots on claimed codes are left alone.
    pub async fn update_profile(
        &self,
        user_id: &str,
        patch: ProfilePatch,
    ) -> Result<User, RegistryError> {
        let mut inner = self.inner.write().await;
        let mut user = inner
            .store
            .find_user(user_id)
            .ok_or_else(|| RegistryError::user_not_found(user_id))?;

        if let Some(email) = &patch.email {
            let taken = inner
                .store
                .find_user_by_email(email)
                .is_some_and(|other| other.id != user.id);
            if taken {
                return Err(RegistryError::Validation(
                    "an account with this email already exists".to_string(),
                ));
            }
        }

        user.apply_patch(patch);
        if !inner.store.replace_user(user.clone()) {
            return Err(RegistryError::user_not_found(user_id));
        }
        info!("Updated profile of {}", user_id);
        Ok(user)
    }

    /// The user's currently claimed codes.
    pub async fn linked_codes(&self, user_id: &str) -> Result<Vec<QrCode>, RegistryError> {
        self.find_user(user_id).await?;
        Ok(self.codes_owned_by(user_id, QrStatus::Claimed).await)
    }
}

// Write back a transitioned code and, when given, the user whose index changed.
fn commit(store: &mut dyn Store, qr: QrCode, user: Option<User>) -> Result<(), RegistryError> {
    let unique_id = qr.unique_id.clone();
    if !store.replace_code(qr) {
        return Err(RegistryError::qr_not_found(&unique_id));
    }
    if let Some(user) = user {
        let user_id = user.id.clone();
        if !store.replace_user(user) {
            return Err(RegistryError::user_not_found(&user_id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::qr_code::QrAction;

    async fn registry_with_users() -> (QrRegistry, Actor, Actor) {
        let registry = QrRegistry::new();
        let alice = registry
            .register_user(User::new(
                "Alice".into(),
                "alice@example.com".into(),
                "hash".into(),
                Some("111".into()),
                None,
            ))
            .await
            .unwrap();
        let bob = registry
            .register_user(User::new(
                "Bob".into(),
                "bob@example.com".into(),
                "hash".into(),
                None,
                Some("https://wa.me/222".into()),
            ))
            .await
            .unwrap();
        (registry, Actor::User(alice.id), Actor::User(bob.id))
    }

    fn admin() -> Actor {
        Actor::Admin("admin".into())
    }

    #[actix_web::test]
    async fn first_batch_starts_at_one() {
        let registry = QrRegistry::new();
        let batch = registry.generate_batch(3).await.unwrap();

        assert_eq!(batch.count, 3);
        assert_eq!(batch.start_id, "SF000001");
        assert_eq!(batch.end_id, "SF000003");
        assert_eq!(batch.id, "batch1");
        assert!(batch.name.starts_with("Batch ") && batch.name.ends_with("-A"));

        let ids: Vec<String> = registry
            .list_codes()
            .await
            .into_iter()
            .map(|qr| qr.unique_id)
            .collect();
        assert_eq!(ids, vec!["SF000001", "SF000002", "SF000003"]);
    }

    #[actix_web::test]
    async fn batches_continue_the_sequence_contiguously() {
        let registry = QrRegistry::new();
        registry.generate_batch(4).await.unwrap();
        let second = registry.generate_batch(7).await.unwrap();

        assert_eq!(second.start_id, "SF000005");
        assert_eq!(second.end_id, "SF000011");
        assert!(second.name.ends_with("-B"));

        let members = registry.printable_batch_members(&second.id).await.unwrap();
        assert_eq!(members.len(), 7);
        for (offset, qr) in members.iter().enumerate() {
            assert_eq!(qr.unique_id, format_unique_id(5 + offset as u64));
            assert_eq!(qr.status, QrStatus::Unclaimed);
        }
    }

    #[actix_web::test]
    async fn non_positive_batch_size_creates_nothing() {
        let registry = QrRegistry::new();
        for count in [0, -5] {
            let err = registry.generate_batch(count).await.unwrap_err();
            assert!(matches!(err, RegistryError::Validation(_)));
        }
        assert!(registry.list_codes().await.is_empty());
        assert!(registry.list_batches().await.is_empty());

        let batch = registry.generate_batch(1).await.unwrap();
        assert_eq!(batch.start_id, "SF000001");
    }

    #[actix_web::test]
    async fn oversized_batch_is_rejected_before_allocating() {
        let registry = QrRegistry::new();
        for count in [MAX_BATCH_SIZE + 1, i64::MAX] {
            let err = registry.generate_batch(count).await.unwrap_err();
            assert!(matches!(err, RegistryError::Validation(_)));
        }
        assert!(registry.list_codes().await.is_empty());
        assert!(registry.list_batches().await.is_empty());

        let batch = registry.generate_batch(MAX_BATCH_SIZE).await.unwrap();
        assert_eq!(batch.count, MAX_BATCH_SIZE as u64);
        assert_eq!(batch.end_id, "SF010000");
    }

    #[actix_web::test]
    async fn deletions_never_free_sequence_numbers() {
        let registry = QrRegistry::new();
        registry.generate_batch(2).await.unwrap();
        registry.delete("SF000002", &admin()).await.unwrap();

        let next = registry.generate_batch(1).await.unwrap();
        assert_eq!(next.start_id, "SF000003");
    }

    #[actix_web::test]
    async fn concurrent_generation_yields_distinct_ids() {
        let registry = QrRegistry::new();
        let (a, b) = tokio::join!(registry.generate_batch(50), registry.generate_batch(50));
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.start_id, b.start_id);
        let mut ids: Vec<String> = registry
            .list_codes()
            .await
            .into_iter()
            .map(|qr| qr.unique_id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[actix_web::test]
    async fn claim_then_second_claim_fails_without_mutation() {
        let (registry, alice, bob) = registry_with_users().await;
        registry.generate_batch(3).await.unwrap();

        let claimed = registry.claim("SF000003", &alice).await.unwrap();
        assert_eq!(claimed.status, QrStatus::Claimed);
        assert_eq!(claimed.owner_id.as_deref(), alice.current_user());

        let err = registry.claim("SF000003", &bob).await.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidTransition {
                action: QrAction::Claim,
                ..
            }
        ));
        assert_eq!(registry.find("SF000003").await.unwrap(), claimed);

        let bob_user = registry.find_user(bob.current_user().unwrap()).await.unwrap();
        assert!(bob_user.linked_qr_codes.is_empty());
    }

    #[actix_web::test]
    async fn claim_snapshots_contact_info_and_links_user() {
        let (registry, alice, _) = registry_with_users().await;
        registry.generate_batch(1).await.unwrap();

        let qr = registry.claim("SF000001", &alice).await.unwrap();
        let contact = qr.contact_info.unwrap();
        assert_eq!(contact.email.as_deref(), Some("alice@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("111"));
        assert!(qr.claimed_at.is_some());

        let user = registry.find_user(alice.current_user().unwrap()).await.unwrap();
        assert_eq!(user.linked_qr_codes, vec!["SF000001".to_string()]);

        // Later profile edits do not rewrite the snapshot.
        registry
            .update_profile(
                &user.id,
                ProfilePatch {
                    phone: Some("999".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let qr = registry.find("SF000001").await.unwrap();
        assert_eq!(qr.contact_info.unwrap().phone.as_deref(), Some("111"));
    }

    #[actix_web::test]
    async fn claim_requires_an_authenticated_user() {
        let registry = QrRegistry::new();
        registry.generate_batch(1).await.unwrap();

        for actor in [Actor::Anonymous, admin()] {
            let err = registry.claim("SF000001", &actor).await.unwrap_err();
            assert!(matches!(err, RegistryError::Authorization(_)));
        }
        assert_eq!(
            registry.find("SF000001").await.unwrap().status,
            QrStatus::Unclaimed
        );
    }

    #[actix_web::test]
    async fn unknown_codes_are_not_found() {
        let (registry, alice, _) = registry_with_users().await;
        assert!(matches!(
            registry.find("SF000404").await,
            Err(RegistryError::NotFound { .. })
        ));
        assert!(matches!(
            registry.claim("SF000404", &alice).await,
            Err(RegistryError::NotFound { .. })
        ));
        assert!(matches!(
            registry.delete("SF000404", &admin()).await,
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[actix_web::test]
    async fn unlink_then_reclaim_leaves_no_residue() {
        let (registry, alice, bob) = registry_with_users().await;
        registry.generate_batch(1).await.unwrap();
        registry.claim("SF000001", &alice).await.unwrap();

        let unlinked = registry.unlink("SF000001", &alice).await.unwrap();
        assert_eq!(unlinked.status, QrStatus::Unclaimed);
        assert!(unlinked.owner_id.is_none() && unlinked.contact_info.is_none());

        let reclaimed = registry.claim("SF000001", &bob).await.unwrap();
        assert_eq!(reclaimed.owner_id.as_deref(), bob.current_user());
        let contact = reclaimed.contact_info.unwrap();
        assert_eq!(contact.email.as_deref(), Some("bob@example.com"));
        assert!(contact.phone.is_none());
        assert_eq!(contact.whatsapp_link.as_deref(), Some("https://wa.me/222"));

        let alice_user = registry.find_user(alice.current_user().unwrap()).await.unwrap();
        assert!(alice_user.linked_qr_codes.is_empty());
    }

    #[actix_web::test]
    async fn only_the_owner_can_unlink() {
        let (registry, alice, bob) = registry_with_users().await;
        registry.generate_batch(2).await.unwrap();
        registry.claim("SF000001", &alice).await.unwrap();

        assert!(matches!(
            registry.unlink("SF000001", &bob).await,
            Err(RegistryError::Authorization(_))
        ));
        assert!(matches!(
            registry.unlink("SF000001", &admin()).await,
            Err(RegistryError::Authorization(_))
        ));
        assert!(matches!(
            registry.unlink("SF000002", &alice).await,
            Err(RegistryError::InvalidTransition { .. })
        ));
        assert_eq!(
            registry.find("SF000001").await.unwrap().owner_id.as_deref(),
            alice.current_user()
        );
    }

    #[actix_web::test]
    async fn delete_is_terminal() {
        let (registry, alice, bob) = registry_with_users().await;
        registry.generate_batch(1).await.unwrap();
        registry.claim("SF000001", &alice).await.unwrap();

        assert!(matches!(
            registry.delete("SF000001", &bob).await,
            Err(RegistryError::Authorization(_))
        ));

        let deleted = registry.delete("SF000001", &alice).await.unwrap();
        assert_eq!(deleted.status, QrStatus::Deleted);
        assert_eq!(deleted.owner_id.as_deref(), alice.current_user());

        let user = registry.find_user(alice.current_user().unwrap()).await.unwrap();
        assert!(user.linked_qr_codes.is_empty());

        for result in [
            registry.claim("SF000001", &bob).await,
            registry.unlink("SF000001", &alice).await,
            registry.delete("SF000001", &alice).await,
            registry.delete("SF000001", &admin()).await,
        ] {
            assert!(matches!(
                result,
                Err(RegistryError::InvalidTransition { .. })
            ));
        }
        assert_eq!(
            registry.find("SF000001").await.unwrap().status,
            QrStatus::Deleted
        );
    }

    #[actix_web::test]
    async fn admins_may_delete_unclaimed_codes_users_may_not() {
        let (registry, alice, _) = registry_with_users().await;
        registry.generate_batch(2).await.unwrap();

        assert!(matches!(
            registry.delete("SF000001", &alice).await,
            Err(RegistryError::Authorization(_))
        ));
        assert!(matches!(
            registry.delete("SF000001", &Actor::Anonymous).await,
            Err(RegistryError::Authorization(_))
        ));
        let deleted = registry.delete("SF000001", &admin()).await.unwrap();
        assert_eq!(deleted.status, QrStatus::Deleted);
        assert!(deleted.owner_id.is_none());
    }

    #[actix_web::test]
    async fn printable_members_exclude_deleted_codes() {
        let (registry, alice, _) = registry_with_users().await;
        registry.generate_batch(2).await.unwrap();
        let batch = registry.generate_batch(5).await.unwrap();

        for qr in registry.list_codes().await.iter().skip(2) {
            assert_eq!(qr.batch_id.as_deref(), Some(batch.id.as_str()));
        }

        registry.claim("SF000004", &alice).await.unwrap();
        registry.delete("SF000004", &alice).await.unwrap();
        registry.delete("SF000006", &admin()).await.unwrap();

        let printable: Vec<String> = registry
            .printable_batch_members(&batch.id)
            .await
            .unwrap()
            .into_iter()
            .map(|qr| qr.unique_id)
            .collect();
        assert_eq!(printable, vec!["SF000003", "SF000005", "SF000007"]);

        assert!(matches!(
            registry.printable_batch_members("batch99").await,
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[actix_web::test]
    async fn linked_codes_only_include_claimed_ones() {
        let (registry, alice, _) = registry_with_users().await;
        registry.generate_batch(3).await.unwrap();
        for id in ["SF000001", "SF000002", "SF000003"] {
            registry.claim(id, &alice).await.unwrap();
        }
        registry.delete("SF000002", &alice).await.unwrap();

        let alice_id = alice.current_user().unwrap();
        let linked: Vec<String> = registry
            .linked_codes(alice_id)
            .await
            .unwrap()
            .into_iter()
            .map(|qr| qr.unique_id)
            .collect();
        assert_eq!(linked, vec!["SF000001", "SF000003"]);
        assert_eq!(
            registry.find_user(alice_id).await.unwrap().linked_qr_codes,
            linked
        );
        assert_eq!(
            registry.codes_owned_by(alice_id, QrStatus::Deleted).await.len(),
            1
        );
    }

    #[actix_web::test]
    async fn search_is_case_insensitive_and_empty_term_returns_all() {
        let (registry, alice, _) = registry_with_users().await;
        registry.generate_batch(12).await.unwrap();
        registry.claim("SF000011", &alice).await.unwrap();

        assert_eq!(registry.search("").await.len(), 12);
        assert_eq!(registry.search("sf00001").await.len(), 3);

        let alice_id = alice.current_user().unwrap().to_uppercase();
        let by_owner = registry.search(&alice_id).await;
        assert_eq!(by_owner.len(), 1);
        assert_eq!(by_owner[0].unique_id, "SF000011");

        assert_eq!(registry.search("unclaimed").await.len(), 11);
    }

    #[actix_web::test]
    async fn duplicate_emails_are_rejected() {
        let (registry, alice, _) = registry_with_users().await;
        let err = registry
            .register_user(User::new(
                "Other".into(),
                "ALICE@example.com".into(),
                "hash".into(),
                None,
                None,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));

        let err = registry
            .update_profile(
                alice.current_user().unwrap(),
                ProfilePatch {
                    email: Some("bob@example.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
    }

    #[actix_web::test]
    async fn wrapping_a_populated_store_continues_the_sequence() {
        let mut store = InMemoryStore::new();
        store.append_codes(vec![
            QrCode::new(format_unique_id(41), None, 0),
            QrCode::new(format_unique_id(7), None, 0),
        ]);
        let registry = QrRegistry::with_store(Box::new(store));

        let batch = registry.generate_batch(1).await.unwrap();
        assert_eq!(batch.start_id, "SF000042");
    }
}
