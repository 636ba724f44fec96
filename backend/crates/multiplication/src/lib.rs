//! Multiplication Game Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, answer verification, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories, random factor source
//! - `presentation/` - HTTP handlers
//!
//! ## Trust Model
//! - The backend alone decides whether an attempt is correct
//! - Attempts arriving already marked as correct are rejected before anything is stored
//! - The stored record is a checked copy; the submitted attempt is never mutated

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::MultiplicationConfig;
pub use domain::value_objects::FactorRange;
pub use error::{MultiplicationError, MultiplicationResult};
pub use infra::{InMemoryMultiplicationRepository, PgMultiplicationRepository, RandomFactorGenerator};
pub use presentation::router::{multiplication_router, multiplication_router_generic};
