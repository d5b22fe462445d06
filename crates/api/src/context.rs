use bookshelf_core::Username;

/// Authenticated identity for a request, attached by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    username: Username,
}

impl UserContext {
    pub fn new(username: Username) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}
