//! Password hashing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordError(String);

impl From<bcrypt::BcryptError> for PasswordError {
    fn from(value: bcrypt::BcryptError) -> Self {
        Self(value.to_string())
    }
}

/// One-way salted password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError>;

    /// `Ok(false)` on mismatch; `Err` only when `hashed` is unreadable.
    fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, PasswordError>;
}

/// bcrypt with a fixed cost factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub const DEFAULT_COST: u32 = 10;

    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, PasswordError> {
        Ok(bcrypt::verify(plaintext, hashed)?)
    }
}
