//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{MultiplicationResultAttempt, User};
use crate::domain::value_objects::Alias;
use crate::error::MultiplicationResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find a stored user by alias
    async fn find_by_alias(&self, alias: &Alias) -> MultiplicationResult<Option<User>>;
}

/// Attempt repository trait
#[trait_variant::make(AttemptRepository: Send)]
pub trait LocalAttemptRepository {
    /// Store a checked attempt.
    ///
    /// A user without an id is created (or matched by alias) in the same
    /// write as the attempt.
    async fn save(&self, attempt: &MultiplicationResultAttempt) -> MultiplicationResult<()>;

    /// Most recent attempts of an alias, newest first
    async fn find_latest_by_alias(
        &self,
        alias: &Alias,
        limit: u32,
    ) -> MultiplicationResult<Vec<MultiplicationResultAttempt>>;
}
