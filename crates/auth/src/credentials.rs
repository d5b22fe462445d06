//! Registration and login.
//!
//! Both calls run the password hasher and are therefore CPU-bound; async
//! callers should move them off the reactor.

use chrono::{DateTime, Utc};
use thiserror::Error;

use bookshelf_core::Username;

use crate::account::{Account, AccountStore};
use crate::jwt::{JwtIssuer, TokenError};
use crate::password::{PasswordError, PasswordHasher};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,

    /// Same error for unknown user and wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Hashing(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Hash the password and append a new account. No uniqueness check.
pub fn register(
    store: &dyn AccountStore,
    hasher: &dyn PasswordHasher,
    username: &str,
    password: &str,
) -> Result<Account, AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let account = Account {
        username: Username::new(username),
        password_hash: hasher.hash(password)?,
    };
    store.insert(account.clone());
    tracing::info!(username, "user registered");
    Ok(account)
}

/// Check the password against the first account with this username and
/// issue a token for it.
pub fn login(
    store: &dyn AccountStore,
    hasher: &dyn PasswordHasher,
    issuer: &dyn JwtIssuer,
    username: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let username = Username::new(username);
    let Some(account) = store.find_first(&username) else {
        tracing::info!(%username, "login rejected");
        return Err(AuthError::InvalidCredentials);
    };

    if !hasher.verify(password, &account.password_hash)? {
        tracing::info!(%username, "login rejected");
        return Err(AuthError::InvalidCredentials);
    }

    Ok(issuer.issue(&account.username, now)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::InMemoryAccounts;
    use crate::jwt::{Hs256Jwt, JwtValidator};
    use crate::password::BcryptHasher;

    fn fixtures() -> (InMemoryAccounts, BcryptHasher, Hs256Jwt) {
        (
            InMemoryAccounts::new(),
            BcryptHasher::new(4),
            Hs256Jwt::new(b"test-secret"),
        )
    }

    #[test]
    fn register_requires_both_fields() {
        let (store, hasher, _) = fixtures();
        assert_eq!(
            register(&store, &hasher, "", "pw"),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            register(&store, &hasher, "alice", ""),
            Err(AuthError::MissingCredentials)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn register_stores_a_hash_not_the_password() {
        let (store, hasher, _) = fixtures();
        let account = register(&store, &hasher, "alice", "pw").unwrap();
        assert_ne!(account.password_hash, "pw");
        assert!(hasher.verify("pw", &account.password_hash).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn login_issues_token_for_username() {
        let (store, hasher, jwt) = fixtures();
        register(&store, &hasher, "alice", "pw").unwrap();

        let now = Utc::now();
        let token = login(&store, &hasher, &jwt, "alice", "pw", now).unwrap();
        let claims = jwt.validate(&token, now).unwrap();
        assert_eq!(claims.username, Username::new("alice"));
    }

    #[test]
    fn login_failures_are_indistinguishable() {
        let (store, hasher, jwt) = fixtures();
        register(&store, &hasher, "alice", "pw").unwrap();
        let now = Utc::now();

        let unknown = login(&store, &hasher, &jwt, "bob", "pw", now).unwrap_err();
        let wrong = login(&store, &hasher, &jwt, "alice", "nope", now).unwrap_err();
        assert_eq!(unknown, AuthError::InvalidCredentials);
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn login_checks_only_first_duplicate() {
        let (store, hasher, jwt) = fixtures();
        register(&store, &hasher, "alice", "first").unwrap();
        register(&store, &hasher, "alice", "second").unwrap();
        let now = Utc::now();

        assert!(login(&store, &hasher, &jwt, "alice", "first", now).is_ok());
        assert_eq!(
            login(&store, &hasher, &jwt, "alice", "second", now),
            Err(AuthError::InvalidCredentials)
        );
    }
}
