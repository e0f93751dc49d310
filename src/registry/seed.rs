use log::info;

use crate::models::actor::Actor;
use crate::models::user::User;
use crate::registry::error::RegistryError;
use crate::registry::qr_registry::QrRegistry;

pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "password";

/// Populate an empty registry with a demo account and one batch: two codes
/// claimed by the demo user, one deleted, the rest unclaimed.
pub async fn seed_demo(
    registry: &QrRegistry,
    password_hash: String,
    admin_username: &str,
) -> Result<User, RegistryError> {
    let user = registry
        .register_user(User::new(
            "John Doe".to_string(),
            DEMO_EMAIL.to_string(),
            password_hash,
            Some("123-456-7890".to_string()),
            Some("https://wa.me/1234567890".to_string()),
        ))
        .await?;
    let owner = Actor::User(user.id.clone());

    let batch = registry.generate_batch(5).await?;
    let members = registry.printable_batch_members(&batch.id).await?;
    for qr in members.iter().take(2) {
        registry.claim(&qr.unique_id, &owner).await?;
    }
    if let Some(qr) = members.get(3) {
        registry
            .delete(&qr.unique_id, &Actor::Admin(admin_username.to_string()))
            .await?;
    }

    info!("Seeded demo data: user {} and {}", DEMO_EMAIL, batch.name);
    registry.find_user(&user.id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::qr_code::QrStatus;

    #[actix_web::test]
    async fn seeds_every_status() {
        let registry = QrRegistry::new();
        let user = seed_demo(&registry, "hash".into(), "admin").await.unwrap();

        assert_eq!(user.linked_qr_codes, vec!["SF000001", "SF000002"]);
        let statuses: Vec<QrStatus> = registry
            .list_codes()
            .await
            .into_iter()
            .map(|qr| qr.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                QrStatus::Claimed,
                QrStatus::Claimed,
                QrStatus::Unclaimed,
                QrStatus::Deleted,
                QrStatus::Unclaimed,
            ]
        );
    }
}
