//! Issued session tokens.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

/// The set of sessions the login handler has issued.
///
/// Tokens are opaque and live until the process does; there is no expiry
/// and no sign-out surface.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    tokens: Mutex<HashSet<String>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // The token set is still intact behind a poisoned lock; sessions issued
    // before a handler panic stay valid.
    fn tokens(&self) -> MutexGuard<'_, HashSet<String>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mint a fresh token and remember it.
    pub fn issue(&self) -> String {
        let token = Uuid::now_v7().to_string();
        self.tokens().insert(token.clone());
        token
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens().contains(token)
    }
}
