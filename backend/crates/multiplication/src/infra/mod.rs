//! Infrastructure Layer
//!
//! Database implementations and the random factor source.

pub mod memory;
pub mod postgres;
pub mod random;

pub use memory::InMemoryMultiplicationRepository;
pub use postgres::PgMultiplicationRepository;
pub use random::RandomFactorGenerator;
