//! Multiplication Router

use crate::application::config::MultiplicationConfig;
use crate::domain::repository::{AttemptRepository, UserRepository};
use crate::domain::services::RandomGeneratorService;
use crate::infra::postgres::PgMultiplicationRepository;
use crate::infra::random::RandomFactorGenerator;
use crate::presentation::handlers::{self, MultiplicationAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the multiplication router with PostgreSQL repository
pub fn multiplication_router(
    repo: PgMultiplicationRepository,
    config: MultiplicationConfig,
) -> Router {
    let generator = RandomFactorGenerator::new(config.factor_range);
    multiplication_router_generic(repo, generator, config)
}

/// Create a generic multiplication router for any repository and factor source
pub fn multiplication_router_generic<R, G>(
    repo: R,
    generator: G,
    config: MultiplicationConfig,
) -> Router
where
    R: UserRepository + AttemptRepository + Clone + Send + Sync + 'static,
    G: RandomGeneratorService + Clone + Send + Sync + 'static,
{
    let state = MultiplicationAppState {
        repo: Arc::new(repo),
        generator: Arc::new(generator),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/results",
            get(handlers::get_results::<R, G>).post(handlers::post_result::<R, G>),
        )
        .route(
            "/multiplications/random",
            get(handlers::random_multiplication::<R, G>),
        )
        .with_state(state)
}
