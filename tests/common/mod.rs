use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use chrono::Duration;
use editorial_tracker::auth::jwt::{JwtResolver, JwtService};
use editorial_tracker::auth::stub::FixedUserResolver;
use editorial_tracker::auth::CredentialResolver;
use editorial_tracker::config::{AppConfig, AuthMode};
use editorial_tracker::models::{File, Folder, User};
use editorial_tracker::routes;
use editorial_tracker::seed::seed_users;
use editorial_tracker::state::AppState;
use editorial_tracker::store::{InMemoryStore, Integrity, ProductionStore};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::util::ServiceExt;

pub struct TestApp {
    #[allow(dead_code)]
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// Empty store, every request resolved to the seeded admin.
    #[allow(dead_code)]
    pub fn new() -> Result<Self> {
        let resolver: Arc<dyn CredentialResolver> =
            Arc::new(FixedUserResolver::first_of(&seed_users())?);
        Ok(Self::build(
            InMemoryStore::new(seed_users(), Integrity::Permissive),
            move |_| resolver,
        ))
    }

    /// Empty store, every request resolved to `user`.
    #[allow(dead_code)]
    pub fn acting_as(user: User) -> Self {
        let resolver: Arc<dyn CredentialResolver> = Arc::new(FixedUserResolver::new(user));
        Self::build(
            InMemoryStore::new(seed_users(), Integrity::Permissive),
            move |_| resolver,
        )
    }

    #[allow(dead_code)]
    pub fn with_data(folders: Vec<Folder>, files: Vec<File>, integrity: Integrity) -> Result<Self> {
        let resolver: Arc<dyn CredentialResolver> =
            Arc::new(FixedUserResolver::first_of(&seed_users())?);
        Ok(Self::build(
            InMemoryStore::with_data(seed_users(), folders, files, integrity),
            move |_| resolver,
        ))
    }

    /// Store seeded with `users`, bearer tokens verified by `jwt`.
    #[allow(dead_code)]
    pub fn with_jwt(users: Vec<User>, jwt: JwtService) -> Self {
        Self::build(
            InMemoryStore::new(users, Integrity::Permissive),
            move |store| -> Arc<dyn CredentialResolver> { Arc::new(JwtResolver::new(jwt, store)) },
        )
    }

    fn build<F>(store: InMemoryStore, resolver: F) -> Self
    where
        F: FnOnce(Arc<dyn ProductionStore>) -> Arc<dyn CredentialResolver>,
    {
        let config = AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            cors_allowed_origin: None,
            auth_mode: AuthMode::Stub,
            jwt_secret: None,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
            jwt_expiry_minutes: 60,
            seed_demo_data: false,
            integrity: store.integrity(),
        };

        let store: Arc<dyn ProductionStore> = Arc::new(store);
        let credentials = resolver(store.clone());
        let state = AppState::new(config, store, credentials);
        let router = routes::create_router(state.clone());

        Self { state, router }
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
        token: Option<&str>,
    ) -> Result<hyper::Response<Body>> {
        let body = serde_json::to_vec(payload)?;
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = builder.body(Body::from(body))?;
        Ok(self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response"))
    }

    /// GET with a raw `Authorization` header value.
    #[allow(dead_code)]
    pub async fn get_with_authorization(
        &self,
        path: &str,
        authorization: &str,
    ) -> Result<hyper::Response<Body>> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header("authorization", authorization)
            .body(Body::empty())?;
        Ok(self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response"))
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<hyper::Response<Body>> {
        let mut builder = Request::builder().method(Method::GET).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = builder.body(Body::empty())?;
        Ok(self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response"))
    }
}

#[allow(dead_code)]
pub fn test_jwt() -> JwtService {
    JwtService::new(
        "test-secret",
        "test-issuer",
        "test-audience",
        Duration::minutes(60),
    )
}

pub async fn body_to_vec(body: Body) -> Result<Vec<u8>> {
    let collected = body
        .collect()
        .await
        .map_err(|err| anyhow!("failed to read response body: {err}"))?;
    Ok(collected.to_bytes().to_vec())
}

pub async fn read_json<T: DeserializeOwned>(response: hyper::Response<Body>) -> Result<T> {
    let body = body_to_vec(response.into_body()).await?;
    Ok(serde_json::from_slice(&body)?)
}
