//! PostgreSQL Repository Implementations

use crate::domain::entities::{Multiplication, MultiplicationResultAttempt, User};
use crate::domain::repository::{AttemptRepository, UserRepository};
use crate::domain::value_objects::Alias;
use crate::error::MultiplicationResult;
use kernel::id::{AttemptId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgMultiplicationRepository {
    pool: PgPool,
}

impl PgMultiplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgMultiplicationRepository {
    async fn find_by_alias(&self, alias: &Alias) -> MultiplicationResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, alias
            FROM users
            WHERE alias = $1
            "#,
        )
        .bind(alias.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

impl AttemptRepository for PgMultiplicationRepository {
    async fn save(&self, attempt: &MultiplicationResultAttempt) -> MultiplicationResult<()> {
        let mut tx = self.pool.begin().await?;

        // New aliases get their user row in the same transaction
        let user_id = match attempt.user.id {
            Some(id) => id.into_uuid(),
            None => {
                sqlx::query_scalar::<_, Uuid>(
                    r#"
                    INSERT INTO users (user_id, alias)
                    VALUES ($1, $2)
                    ON CONFLICT (alias) DO UPDATE SET alias = EXCLUDED.alias
                    RETURNING user_id
                    "#,
                )
                .bind(UserId::new().into_uuid())
                .bind(attempt.user.alias.as_str())
                .fetch_one(&mut *tx)
                .await?
            }
        };

        let attempt_id = AttemptId::new();

        sqlx::query(
            r#"
            INSERT INTO multiplication_attempts (
                attempt_id,
                user_id,
                factor_a,
                factor_b,
                result_attempt,
                correct
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(attempt_id.into_uuid())
        .bind(user_id)
        .bind(attempt.multiplication.factor_a)
        .bind(attempt.multiplication.factor_b)
        .bind(attempt.result_attempt)
        .bind(attempt.correct)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            attempt_id = %attempt_id,
            user_id = %user_id,
            correct = attempt.correct,
            "Attempt stored"
        );

        Ok(())
    }

    async fn find_latest_by_alias(
        &self,
        alias: &Alias,
        limit: u32,
    ) -> MultiplicationResult<Vec<MultiplicationResultAttempt>> {
        let rows = sqlx::query_as::<_, AttemptRow>(
            r#"
            SELECT
                a.attempt_id,
                u.user_id,
                u.alias,
                a.factor_a,
                a.factor_b,
                a.result_attempt,
                a.correct
            FROM multiplication_attempts a
            JOIN users u ON u.user_id = a.user_id
            WHERE u.alias = $1
            ORDER BY a.attempt_seq DESC
            LIMIT $2
            "#,
        )
        .bind(alias.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AttemptRow::into_attempt).collect())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    alias: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User::persisted(UserId::from_uuid(self.user_id), self.alias)
    }
}

#[derive(sqlx::FromRow)]
struct AttemptRow {
    attempt_id: Uuid,
    user_id: Uuid,
    alias: String,
    factor_a: i32,
    factor_b: i32,
    result_attempt: i32,
    correct: bool,
}

impl AttemptRow {
    fn into_attempt(self) -> MultiplicationResultAttempt {
        MultiplicationResultAttempt {
            id: Some(AttemptId::from_uuid(self.attempt_id)),
            user: User::persisted(UserId::from_uuid(self.user_id), self.alias),
            multiplication: Multiplication::new(self.factor_a, self.factor_b),
            result_attempt: self.result_attempt,
            correct: self.correct,
        }
    }
}
