//! `bookshelf-auth` — credentials, accounts and bearer tokens.
//!
//! This crate is intentionally decoupled from HTTP.

pub mod account;
pub mod claims;
pub mod credentials;
pub mod jwt;
pub mod password;

pub use account::{Account, AccountStore, InMemoryAccounts};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use credentials::{AuthError, login, register};
pub use jwt::{Hs256Jwt, JwtIssuer, JwtValidator, TokenError};
pub use password::{BcryptHasher, PasswordError, PasswordHasher};
