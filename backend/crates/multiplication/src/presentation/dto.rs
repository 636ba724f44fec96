//! API DTOs (Data Transfer Objects)

use crate::domain::entities::{Multiplication, MultiplicationResultAttempt, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub alias: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplicationDto {
    pub factor_a: i32,
    pub factor_b: i32,
}

/// Body of POST /results, and element of every /results response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub user: UserDto,
    pub multiplication: MultiplicationDto,
    pub result_attempt: i32,
    #[serde(default)]
    pub correct: bool,
}

/// Query for GET /results
#[derive(Debug, Clone, Deserialize)]
pub struct StatsQuery {
    pub alias: String,
}

impl AttemptDto {
    /// Inbound ids are client-controlled and dropped here
    pub fn into_domain(self) -> MultiplicationResultAttempt {
        MultiplicationResultAttempt::new(
            User::new(self.user.alias),
            self.multiplication.into(),
            self.result_attempt,
            self.correct,
        )
    }
}

impl From<&MultiplicationResultAttempt> for AttemptDto {
    fn from(attempt: &MultiplicationResultAttempt) -> Self {
        Self {
            id: attempt.id.map(|id| id.into_uuid()),
            user: UserDto::from(&attempt.user),
            multiplication: attempt.multiplication.into(),
            result_attempt: attempt.result_attempt,
            correct: attempt.correct,
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.map(|id| id.into_uuid()),
            alias: user.alias.as_str().to_owned(),
        }
    }
}

impl From<Multiplication> for MultiplicationDto {
    fn from(multiplication: Multiplication) -> Self {
        Self {
            factor_a: multiplication.factor_a,
            factor_b: multiplication.factor_b,
        }
    }
}

impl From<MultiplicationDto> for Multiplication {
    fn from(dto: MultiplicationDto) -> Self {
        Multiplication::new(dto.factor_a, dto.factor_b)
    }
}
