//! User Store State Management
//!
//! The store is an explicitly owned object injected into the backend router,
//! so each test (or process) gets its own isolated directory.

use super::models::User;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

// =============================================================================
// Application State
// =============================================================================

/// Shared store handle passed to the backend route handlers
pub type SharedStore = Arc<UserStore>;

/// In-memory user directory, volatile for the lifetime of the process.
pub struct UserStore {
    /// Records keyed by their numeric id.
    /// DashMap allows concurrent access without external Mutexes.
    users: DashMap<u64, User>,

    /// Next id to hand out. Starts at 1 and only moves forward.
    next_id: AtomicU64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a user with the next id and the current timestamp.
    pub fn create(&self, name: String, email: String) -> User {
        let key = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: key.to_string(),
            name,
            email,
            created_at: Utc::now(),
        };
        self.users.insert(key, user.clone());
        user
    }

    pub fn get(&self, id: &str) -> Option<User> {
        let key = parse_key(id)?;
        self.users.get(&key).map(|entry| entry.value().clone())
    }

    /// All users in insertion order.
    pub fn list(&self) -> Vec<User> {
        let mut entries: Vec<(u64, User)> = self
            .users
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        entries.sort_by_key(|(key, _)| *key);
        entries.into_iter().map(|(_, user)| user).collect()
    }

    /// Removes the user, returning whether it existed.
    pub fn delete(&self, id: &str) -> bool {
        parse_key(id)
            .and_then(|key| self.users.remove(&key))
            .is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.users.len()
    }
}

/// Maps an external id onto a store key. Only the canonical decimal
/// rendering matches, so `"01"` or `"+1"` never alias user `"1"`.
fn parse_key(id: &str) -> Option<u64> {
    let key: u64 = id.parse().ok()?;
    (key.to_string() == id).then_some(key)
}
