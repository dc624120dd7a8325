use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::{AuthError, CredentialResolver};
use crate::{config::AppConfig, models::User, store::ProductionStore};

#[derive(Clone)]
pub struct JwtService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    expiry: Duration,
}

impl JwtService {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let secret = config
            .jwt_secret
            .as_deref()
            .context("JWT_SECRET must be set to issue or verify tokens")?;
        Ok(Self::new(
            secret,
            &config.jwt_issuer,
            &config.jwt_audience,
            Duration::minutes(config.jwt_expiry_minutes),
        ))
    }

    pub fn new(secret: &str, issuer: &str, audience: &str, expiry: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_owned(),
            audience: audience.to_owned(),
            expiry,
        }
    }

    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let exp = now + self.expiry;
        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            role: user.role.as_str().to_owned(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(&[self.audience.clone()]);
        validation.set_issuer(&[self.issuer.clone()]);
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub name: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub iat: usize,
    pub exp: usize,
}

/// Verifies signed bearer tokens and maps their subject onto a seeded user.
/// The role comes from the store, not from the token.
pub struct JwtResolver {
    jwt: JwtService,
    store: Arc<dyn ProductionStore>,
}

impl JwtResolver {
    pub fn new(jwt: JwtService, store: Arc<dyn ProductionStore>) -> Self {
        Self { jwt, store }
    }
}

#[async_trait]
impl CredentialResolver for JwtResolver {
    async fn resolve(&self, token: Option<&str>) -> Result<User, AuthError> {
        let token = token.ok_or(AuthError::InvalidCredential)?;
        let claims = self.jwt.verify_token(token).map_err(|err| {
            tracing::debug!(error = %err, "bearer token failed verification");
            AuthError::InvalidCredential
        })?;

        self.store
            .find_user(claims.sub)
            .await
            .ok_or(AuthError::InvalidCredential)
    }
}
