use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use crate::{
    auth::{jwt::JwtResolver, jwt::JwtService, stub::FixedUserResolver, CredentialResolver},
    config::{AppConfig, AuthMode},
    seed,
    store::{InMemoryStore, ProductionStore},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn ProductionStore>,
    pub credentials: Arc<dyn CredentialResolver>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn ProductionStore>,
        credentials: Arc<dyn CredentialResolver>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            credentials,
        }
    }

    /// Seeds an in-memory store and picks the credential resolver named by
    /// `config.auth_mode`.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let users = seed::seed_users();
        let store: Arc<dyn ProductionStore> = if config.seed_demo_data {
            let now = Utc::now().naive_utc();
            Arc::new(InMemoryStore::with_data(
                users.clone(),
                seed::demo_folders(now),
                seed::demo_files(now),
                config.integrity,
            ))
        } else {
            Arc::new(InMemoryStore::new(users.clone(), config.integrity))
        };

        let credentials: Arc<dyn CredentialResolver> = match config.auth_mode {
            AuthMode::Stub => Arc::new(FixedUserResolver::first_of(&users)?),
            AuthMode::Jwt => Arc::new(JwtResolver::new(
                JwtService::from_config(&config)?,
                store.clone(),
            )),
        };

        Ok(Self::new(config, store, credentials))
    }
}
