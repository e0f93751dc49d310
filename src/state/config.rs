use anyhow::{Context, Result, bail};
use std::env;

const DEFAULT_APP_DOMAIN: &str = "https://stickerfind.example.com";
const MAX_TOKEN_TTL_DAYS: i64 = 365;
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:4173"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub app_domain: String, // Base URL printed into every QR code
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub admin_username: String,
    pub admin_password: String,
    pub bcrypt_cost: u32,
    pub seed_demo_data: bool,
    pub cors_origins: Vec<String>,
}

fn parse_token_ttl_days(value: &str) -> Result<i64> {
    let days = value
        .trim()
        .parse::<i64>()
        .context("TOKEN_TTL_DAYS must be a number of days")?;
    if !(1..=MAX_TOKEN_TTL_DAYS).contains(&days) {
        bail!("TOKEN_TTL_DAYS must be between 1 and {}", MAX_TOKEN_TTL_DAYS);
    }
    Ok(days)
}

impl AppConfig {
    /// Read configuration from the environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value.parse::<u16>().context("PORT must be a port number")?,
            Err(_) => 8080,
        };
        let token_ttl_days = match env::var("TOKEN_TTL_DAYS") {
            Ok(value) => parse_token_ttl_days(&value)?,
            Err(_) => 10,
        };
        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(value) => value.parse::<u32>().context("BCRYPT_COST must be a number")?,
            Err(_) => bcrypt::DEFAULT_COST,
        };
        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            Err(_) => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1")),
            port,
            app_domain: env::var("APP_DOMAIN").unwrap_or_else(|_| String::from(DEFAULT_APP_DOMAIN)),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET not set")?,
            token_ttl_days,
            admin_username: env::var("ADMIN_USERNAME").context("ADMIN_USERNAME not set")?,
            admin_password: env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD not set")?,
            bcrypt_cost,
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|value| matches!(value.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            cors_origins,
        })
    }

    /// Configuration for tests: fixed secrets, cheapest bcrypt cost.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            bind_addr: String::from("127.0.0.1"),
            port: 0,
            app_domain: String::from("https://find.test"),
            jwt_secret: String::from("test-secret"),
            token_ttl_days: 1,
            admin_username: String::from("admin"),
            admin_password: String::from("admin-pass"),
            bcrypt_cost: 4,
            seed_demo_data: false,
            cors_origins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_ttl_must_be_a_sane_number_of_days() {
        assert_eq!(parse_token_ttl_days("30").unwrap(), 30);
        assert_eq!(parse_token_ttl_days(" 365 ").unwrap(), 365);
        assert!(parse_token_ttl_days("0").is_err());
        assert!(parse_token_ttl_days("-3").is_err());
        assert!(parse_token_ttl_days("9223372036854775807").is_err());
        assert!(parse_token_ttl_days("ten").is_err());
    }
}
