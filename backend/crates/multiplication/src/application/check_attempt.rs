//! Check Attempt Use Case

use crate::domain::entities::MultiplicationResultAttempt;
use crate::domain::repository::{AttemptRepository, UserRepository};
use crate::domain::services::verify_result;
use crate::error::{MultiplicationError, MultiplicationResult};
use std::sync::Arc;

/// Check Attempt Use Case
pub struct CheckAttemptUseCase<U, A>
where
    U: UserRepository,
    A: AttemptRepository,
{
    user_repo: Arc<U>,
    attempt_repo: Arc<A>,
}

impl<U, A> CheckAttemptUseCase<U, A>
where
    U: UserRepository,
    A: AttemptRepository,
{
    pub fn new(user_repo: Arc<U>, attempt_repo: Arc<A>) -> Self {
        Self {
            user_repo,
            attempt_repo,
        }
    }

    /// Verify the attempt server-side and store a checked copy.
    ///
    /// The submitted attempt is never modified; the stored record references
    /// the existing user for the alias when there is one.
    pub async fn execute(
        &self,
        attempt: &MultiplicationResultAttempt,
    ) -> MultiplicationResult<bool> {
        let existing_user = self.user_repo.find_by_alias(&attempt.user.alias).await?;

        // Correctness is decided here, never by the client
        if attempt.correct {
            tracing::warn!(
                alias = %attempt.user.alias,
                "Rejected attempt already marked as correct"
            );
            return Err(MultiplicationError::TamperedAttempt);
        }

        let correct = verify_result(&attempt.multiplication, attempt.result_attempt);

        let checked = MultiplicationResultAttempt::new(
            existing_user.unwrap_or_else(|| attempt.user.clone()),
            attempt.multiplication,
            attempt.result_attempt,
            correct,
        );

        self.attempt_repo.save(&checked).await?;

        tracing::info!(
            alias = %checked.user.alias,
            factor_a = checked.multiplication.factor_a,
            factor_b = checked.multiplication.factor_b,
            result_attempt = checked.result_attempt,
            correct,
            "Checked attempt"
        );

        Ok(correct)
    }
}
