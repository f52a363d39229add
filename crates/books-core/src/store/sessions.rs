use std::collections::HashSet;

use books_security::SessionToken;

#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: HashSet<SessionToken>,
}

impl SessionStore {
    pub fn insert(&mut self, token: SessionToken) {
        self.tokens.insert(token);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
