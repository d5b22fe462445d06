//! Registered accounts.

use std::sync::{Arc, PoisonError, RwLock};

use bookshelf_core::Username;

/// A registered user. Never mutated or removed once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: Username,
    pub password_hash: String,
}

/// Account storage. Usernames are not required to be unique.
pub trait AccountStore: Send + Sync {
    fn insert(&self, account: Account);

    /// The earliest registered account with this username.
    fn find_first(&self, username: &Username) -> Option<Account>;
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn insert(&self, account: Account) {
        (**self).insert(account)
    }

    fn find_first(&self, username: &Username) -> Option<Account> {
        (**self).find_first(username)
    }
}

/// In-memory account list for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryAccounts {
    inner: RwLock<Vec<Account>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AccountStore for InMemoryAccounts {
    fn insert(&self, account: Account) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(account);
    }

    fn find_first(&self, username: &Username) -> Option<Account> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|a| &a.username == username)
            .cloned()
    }
}
