use std::env;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};

use crate::store::Integrity;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// Every request resolves to the first seeded user.
    Stub,
    Jwt,
}

impl FromStr for AuthMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stub" => Ok(AuthMode::Stub),
            "jwt" => Ok(AuthMode::Jwt),
            other => Err(anyhow!("unknown AUTH_MODE '{other}', expected 'stub' or 'jwt'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub auth_mode: AuthMode,
    pub jwt_secret: Option<String>,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub jwt_expiry_minutes: i64,
    pub seed_demo_data: bool,
    pub integrity: Integrity,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("SERVER_PORT must be a valid u16")?;
        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN");
        let auth_mode = lookup("AUTH_MODE")
            .as_deref()
            .unwrap_or("stub")
            .parse::<AuthMode>()?;
        let jwt_secret = lookup("JWT_SECRET");
        if auth_mode == AuthMode::Jwt && jwt_secret.is_none() {
            bail!("JWT_SECRET must be set when AUTH_MODE=jwt");
        }
        let jwt_issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "editorial-tracker".to_string());
        let jwt_audience =
            lookup("JWT_AUDIENCE").unwrap_or_else(|| "editorial-tracker-clients".to_string());
        let jwt_expiry_minutes = lookup("JWT_EXPIRY_MINUTES")
            .unwrap_or_else(|| "60".to_string())
            .parse()
            .context("JWT_EXPIRY_MINUTES must be an integer")?;
        let seed_demo_data = lookup("SEED_DEMO_DATA").map_or(true, |v| parse_flag(&v));
        let integrity = if lookup("STRICT_INTEGRITY").map_or(false, |v| parse_flag(&v)) {
            Integrity::Strict
        } else {
            Integrity::Permissive
        };

        Ok(Self {
            server_host,
            server_port,
            cors_allowed_origin,
            auth_mode,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            jwt_expiry_minutes,
            seed_demo_data,
            integrity,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
