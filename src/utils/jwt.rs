use anyhow::{Context, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::actor::Actor;
use crate::models::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID, or admin username)
    pub roles: Vec<Role>,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(Role::is_admin)
    }

    pub fn actor(&self) -> Actor {
        if self.is_admin() {
            Actor::Admin(self.sub.clone())
        } else {
            Actor::User(self.sub.clone())
        }
    }
}

pub fn create_token(subject: &str, roles: &[Role], secret: &str, ttl_days: i64) -> Result<String> {
    let now = chrono::Utc::now();
    let expiry = chrono::Duration::try_days(ttl_days)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .context("Token lifetime out of range")?;

    let claims = Claims {
        sub: subject.to_string(),
        roles: roles.to_vec(),
        exp: usize::try_from(expiry.timestamp()).context("Token expiry before the epoch")?,
        iat: usize::try_from(now.timestamp()).context("Clock before the epoch")?,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT")?;

    Ok(token)
}

pub fn validate_token(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT")?;

    Ok(token_data.claims)
}
