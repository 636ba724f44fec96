//! User Stats Use Case

use crate::application::config::MultiplicationConfig;
use crate::domain::entities::MultiplicationResultAttempt;
use crate::domain::repository::AttemptRepository;
use crate::domain::value_objects::Alias;
use crate::error::MultiplicationResult;
use std::sync::Arc;

/// Get Stats For User Use Case
pub struct GetStatsForUserUseCase<A>
where
    A: AttemptRepository,
{
    attempt_repo: Arc<A>,
    config: Arc<MultiplicationConfig>,
}

impl<A> GetStatsForUserUseCase<A>
where
    A: AttemptRepository,
{
    pub fn new(attempt_repo: Arc<A>, config: Arc<MultiplicationConfig>) -> Self {
        Self {
            attempt_repo,
            config,
        }
    }

    /// Latest attempts of the alias, newest first, as storage returns them
    pub async fn execute(
        &self,
        alias: &Alias,
    ) -> MultiplicationResult<Vec<MultiplicationResultAttempt>> {
        self.attempt_repo
            .find_latest_by_alias(alias, self.config.recent_attempts_limit)
            .await
    }
}
