pub mod jwt;
pub mod stub;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;
use thiserror::Error;

use crate::{error::AppError, models::User, state::AppState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credential")]
    InvalidCredential,
    #[error("not authorized")]
    Forbidden,
}

/// Turns the bearer token of a request (if any) into a known user.
#[async_trait]
pub trait CredentialResolver: Send + Sync + 'static {
    async fn resolve(&self, token: Option<&str>) -> Result<User, AuthError>;
}

/// Write operations are reserved for admins and team leads.
pub fn require_writer(user: &User) -> Result<(), AuthError> {
    if user.role.can_write() {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

/// The user behind the current request, as decided by the configured
/// [`CredentialResolver`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
        {
            Ok(TypedHeader(auth)) => Some(auth),
            Err(rejection) => {
                if !rejection.is_missing() {
                    tracing::debug!(
                        error = %rejection,
                        "ignoring malformed authorization header"
                    );
                }
                None
            }
        };
        let token = bearer.as_ref().map(|auth| auth.token());

        let user = state.credentials.resolve(token).await.map_err(|err| {
            tracing::debug!(error = %err, has_token = token.is_some(), "credential rejected");
            AppError::from(err)
        })?;

        Ok(CurrentUser(user))
    }
}
