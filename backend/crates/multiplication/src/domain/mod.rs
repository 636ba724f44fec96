//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Multiplication, User, MultiplicationResultAttempt)
//! - Domain value objects (Alias, FactorRange)
//! - Domain services (answer verification, factor generation trait)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
