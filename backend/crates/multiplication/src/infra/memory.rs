//! In-Memory Repository Implementation
//!
//! Process-local store with the same semantics as the PostgreSQL repository.
//! Used when no database is configured, and by tests.

use crate::domain::entities::{MultiplicationResultAttempt, User};
use crate::domain::repository::{AttemptRepository, UserRepository};
use crate::domain::value_objects::Alias;
use crate::error::{MultiplicationError, MultiplicationResult};
use kernel::id::{AttemptId, UserId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Store {
    users: HashMap<Alias, User>,
    /// Insertion order is recency order
    attempts: Vec<MultiplicationResultAttempt>,
}

/// In-memory repository, cheap to clone (shared store)
#[derive(Clone, Default)]
pub struct InMemoryMultiplicationRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryMultiplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a user directly, returning it with its assigned id
    pub fn insert_user(&self, alias: impl Into<Alias>) -> MultiplicationResult<User> {
        let mut store = self.write()?;
        let alias: Alias = alias.into();
        let user = store
            .users
            .entry(alias.clone())
            .or_insert_with(|| User::persisted(UserId::new(), alias))
            .clone();
        Ok(user)
    }

    /// Total number of stored attempts, across all users
    pub fn attempt_count(&self) -> MultiplicationResult<usize> {
        Ok(self.read()?.attempts.len())
    }

    fn read(&self) -> MultiplicationResult<RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|_| MultiplicationError::Internal("attempt store lock poisoned".into()))
    }

    fn write(&self) -> MultiplicationResult<RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|_| MultiplicationError::Internal("attempt store lock poisoned".into()))
    }
}

impl UserRepository for InMemoryMultiplicationRepository {
    async fn find_by_alias(&self, alias: &Alias) -> MultiplicationResult<Option<User>> {
        Ok(self.read()?.users.get(alias).cloned())
    }
}

impl AttemptRepository for InMemoryMultiplicationRepository {
    async fn save(&self, attempt: &MultiplicationResultAttempt) -> MultiplicationResult<()> {
        let mut store = self.write()?;

        let user = match attempt.user.id {
            Some(_) => attempt.user.clone(),
            None => {
                let alias = attempt.user.alias.clone();
                store
                    .users
                    .entry(alias.clone())
                    .or_insert_with(|| User::persisted(UserId::new(), alias))
                    .clone()
            }
        };

        let stored = MultiplicationResultAttempt {
            id: Some(AttemptId::new()),
            user,
            ..attempt.clone()
        };

        tracing::debug!(alias = %stored.user.alias, correct = stored.correct, "Attempt stored in memory");

        store.attempts.push(stored);
        Ok(())
    }

    async fn find_latest_by_alias(
        &self,
        alias: &Alias,
        limit: u32,
    ) -> MultiplicationResult<Vec<MultiplicationResultAttempt>> {
        let store = self.read()?;
        Ok(store
            .attempts
            .iter()
            .rev()
            .filter(|attempt| &attempt.user.alias == alias)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
