//! Domain Services
//!
//! Pure domain logic for checking answers, and the factor source abstraction.

use crate::domain::entities::Multiplication;

/// Source of random challenge factors
pub trait RandomGeneratorService {
    /// A factor inside the generator's configured range
    fn generate_random_factor(&self) -> i32;
}

/// Whether `result_attempt` is the exact product of the multiplication
pub fn verify_result(multiplication: &Multiplication, result_attempt: i32) -> bool {
    i64::from(result_attempt) == multiplication.result()
}
