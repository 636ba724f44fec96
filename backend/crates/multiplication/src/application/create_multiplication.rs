//! Create Random Multiplication Use Case

use crate::domain::entities::Multiplication;
use crate::domain::services::RandomGeneratorService;
use std::sync::Arc;

/// Create Random Multiplication Use Case
pub struct CreateRandomMultiplicationUseCase<G>
where
    G: RandomGeneratorService,
{
    generator: Arc<G>,
}

impl<G> CreateRandomMultiplicationUseCase<G>
where
    G: RandomGeneratorService,
{
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Factor A is drawn before factor B
    pub fn execute(&self) -> Multiplication {
        let factor_a = self.generator.generate_random_factor();
        let factor_b = self.generator.generate_random_factor();

        tracing::debug!(factor_a, factor_b, "Created random multiplication");

        Multiplication::new(factor_a, factor_b)
    }
}
