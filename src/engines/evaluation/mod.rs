pub mod fitness;

pub use fitness::{calculate_feasibility, calculate_fitness, FitnessEvaluator};
