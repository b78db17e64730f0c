pub mod genome;
pub mod operators;
pub mod repair;
pub mod evolution_engine;
pub mod progress;
pub mod scenarios;

pub use genome::{FieldRange, Genome, GenomeField};
pub use operators::{crossover, generate_random_genome, mutate, tournament_selection};
pub use repair::{repair_genome, validate_genome};
pub use evolution_engine::{optimize_ubi_parameters, sort_by_fitness, EvolutionEngine};
pub use progress::{
    ChannelProgressCallback, ConsoleProgressCallback, NoopProgress, ProgressCallback, ProgressMessage,
};
pub use scenarios::{optimize_for_scenario, Scenario, ScenarioInputs};
