//! Domain Entities
//!
//! Core business entities for the multiplication game.

use crate::domain::value_objects::Alias;
use kernel::id::{AttemptId, UserId};

/// A multiplication challenge. Has no identity beyond its two factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplication {
    pub factor_a: i32,
    pub factor_b: i32,
}

impl Multiplication {
    pub fn new(factor_a: i32, factor_b: i32) -> Self {
        Self { factor_a, factor_b }
    }

    /// Exact product, widened so any pair of `i32` factors fits
    pub fn result(&self) -> i64 {
        i64::from(self.factor_a) * i64::from(self.factor_b)
    }
}

/// User entity - a player identified by alias
///
/// `id` is `None` until the user has been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<UserId>,
    pub alias: Alias,
}

impl User {
    /// A user that has not been stored yet
    pub fn new(alias: impl Into<Alias>) -> Self {
        Self {
            id: None,
            alias: alias.into(),
        }
    }

    /// A user loaded from storage
    pub fn persisted(id: UserId, alias: impl Into<Alias>) -> Self {
        Self {
            id: Some(id),
            alias: alias.into(),
        }
    }
}

/// A user's answer to a multiplication, plus whether it was right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicationResultAttempt {
    pub id: Option<AttemptId>,
    pub user: User,
    pub multiplication: Multiplication,
    pub result_attempt: i32,
    pub correct: bool,
}

impl MultiplicationResultAttempt {
    pub fn new(
        user: User,
        multiplication: Multiplication,
        result_attempt: i32,
        correct: bool,
    ) -> Self {
        Self {
            id: None,
            user,
            multiplication,
            result_attempt,
            correct,
        }
    }

    /// Copy of this attempt carrying a freshly computed correctness flag
    pub fn with_correct(&self, correct: bool) -> Self {
        Self {
            id: None,
            correct,
            ..self.clone()
        }
    }
}
