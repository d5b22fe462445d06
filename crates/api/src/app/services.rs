use std::{sync::Arc, time::Duration};

use chrono::Utc;

use bookshelf_auth::{
    AccountStore, AuthError, BcryptHasher, InMemoryAccounts, JwtIssuer, PasswordHasher, credentials,
};
use bookshelf_catalog::{CatalogRepository, InMemoryCatalog, ReviewManager};

use crate::app::errors::ApiError;
use crate::config::AppConfig;

pub const REGISTER_FAILED: &str = "Error registering user";

/// Everything a handler needs, injected once at startup.
///
/// `books` and `reviews` are two views of the same catalog.
#[derive(Clone)]
pub struct AppServices {
    pub books: Arc<dyn CatalogRepository>,
    pub reviews: Arc<dyn ReviewManager>,
    pub accounts: Arc<dyn AccountStore>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub issuer: Arc<dyn JwtIssuer>,
    pub async_delay: Duration,
}

impl AppServices {
    pub fn from_config(config: &AppConfig, issuer: Arc<dyn JwtIssuer>) -> Self {
        let catalog = Arc::new(InMemoryCatalog::seeded());
        Self {
            books: catalog.clone(),
            reviews: catalog,
            accounts: Arc::new(InMemoryAccounts::new()),
            hasher: Arc::new(BcryptHasher::new(config.bcrypt_cost)),
            issuer,
            async_delay: config.async_delay,
        }
    }

    /// Registration on the blocking pool (bcrypt is CPU-bound).
    pub async fn register(&self, username: String, password: String) -> Result<(), ApiError> {
        let accounts = self.accounts.clone();
        let hasher = self.hasher.clone();
        let registered = tokio::task::spawn_blocking(move || {
            credentials::register(accounts.as_ref(), hasher.as_ref(), &username, &password)
        })
        .await?;

        match registered {
            Ok(_) => Ok(()),
            Err(AuthError::Hashing(err)) => {
                tracing::error!(error = %err, "registration failed");
                Err(ApiError::Internal(REGISTER_FAILED.to_string()))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Login on the blocking pool; yields a signed token.
    pub async fn login(&self, username: String, password: String) -> Result<String, ApiError> {
        let accounts = self.accounts.clone();
        let hasher = self.hasher.clone();
        let issuer = self.issuer.clone();
        let token = tokio::task::spawn_blocking(move || {
            credentials::login(
                accounts.as_ref(),
                hasher.as_ref(),
                issuer.as_ref(),
                &username,
                &password,
                Utc::now(),
            )
        })
        .await??;
        Ok(token)
    }
}
