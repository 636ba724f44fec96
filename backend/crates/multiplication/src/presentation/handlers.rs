//! HTTP Handlers

use crate::application::check_attempt::CheckAttemptUseCase;
use crate::application::config::MultiplicationConfig;
use crate::application::create_multiplication::CreateRandomMultiplicationUseCase;
use crate::application::user_stats::GetStatsForUserUseCase;
use crate::domain::repository::{AttemptRepository, UserRepository};
use crate::domain::services::RandomGeneratorService;
use crate::domain::value_objects::Alias;
use crate::error::MultiplicationResult;
use crate::presentation::dto::{AttemptDto, MultiplicationDto, StatsQuery};
use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

/// Shared state for multiplication handlers
#[derive(Clone)]
pub struct MultiplicationAppState<R, G>
where
    R: UserRepository + AttemptRepository + Clone + Send + Sync + 'static,
    G: RandomGeneratorService + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub generator: Arc<G>,
    pub config: Arc<MultiplicationConfig>,
}

/// GET /multiplications/random
pub async fn random_multiplication<R, G>(
    State(state): State<MultiplicationAppState<R, G>>,
) -> Json<MultiplicationDto>
where
    R: UserRepository + AttemptRepository + Clone + Send + Sync + 'static,
    G: RandomGeneratorService + Clone + Send + Sync + 'static,
{
    let use_case = CreateRandomMultiplicationUseCase::new(state.generator.clone());

    Json(use_case.execute().into())
}

/// POST /results
///
/// Responds with the submitted attempt carrying the server-computed
/// correctness; the inbound `correct` value is never echoed.
pub async fn post_result<R, G>(
    State(state): State<MultiplicationAppState<R, G>>,
    Json(req): Json<AttemptDto>,
) -> MultiplicationResult<Json<AttemptDto>>
where
    R: UserRepository + AttemptRepository + Clone + Send + Sync + 'static,
    G: RandomGeneratorService + Clone + Send + Sync + 'static,
{
    let attempt = req.into_domain();

    let use_case = CheckAttemptUseCase::new(state.repo.clone(), state.repo.clone());
    let correct = use_case.execute(&attempt).await?;

    Ok(Json(AttemptDto::from(&attempt.with_correct(correct))))
}

/// GET /results?alias=
pub async fn get_results<R, G>(
    State(state): State<MultiplicationAppState<R, G>>,
    Query(query): Query<StatsQuery>,
) -> MultiplicationResult<Json<Vec<AttemptDto>>>
where
    R: UserRepository + AttemptRepository + Clone + Send + Sync + 'static,
    G: RandomGeneratorService + Clone + Send + Sync + 'static,
{
    let alias = Alias::new(query.alias);

    let use_case = GetStatsForUserUseCase::new(state.repo.clone(), state.config.clone());
    let attempts = use_case.execute(&alias).await?;

    Ok(Json(attempts.iter().map(AttemptDto::from).collect()))
}
