use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::{AuthError, CredentialResolver};
use crate::models::User;

/// Resolves every request to the same user without looking at the token.
///
/// Placeholder for deployments without real credentials; swap in
/// [`super::jwt::JwtResolver`] to verify callers.
#[derive(Debug, Clone)]
pub struct FixedUserResolver {
    user: User,
}

impl FixedUserResolver {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn first_of(users: &[User]) -> Result<Self> {
        users
            .first()
            .cloned()
            .map(Self::new)
            .ok_or_else(|| anyhow!("fixed-user resolver needs at least one seeded user"))
    }
}

#[async_trait]
impl CredentialResolver for FixedUserResolver {
    async fn resolve(&self, _token: Option<&str>) -> Result<User, AuthError> {
        Ok(self.user.clone())
    }
}
