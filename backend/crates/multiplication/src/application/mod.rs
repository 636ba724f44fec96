//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod check_attempt;
pub mod config;
pub mod create_multiplication;
pub mod user_stats;
