use super::genome::Genome;
use std::sync::mpsc::Sender;

/// Notified once per generation, in increasing order from 0, after the
/// population has been ranked. Purely informational: the loop never waits on it.
pub trait ProgressCallback {
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &Genome);
}

impl<F> ProgressCallback for F
where
    F: FnMut(usize, f64, &Genome),
{
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &Genome) {
        self(generation, best_fitness, best_genome)
    }
}

pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64, _best_genome: &Genome) {}
}

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &Genome) {
        log::info!(
            "Generation {} complete. Best fitness: {:.4} (adult UBI ${}, tax {}%)",
            generation + 1,
            best_fitness,
            best_genome.adult_ubi,
            best_genome.flat_tax_rate
        );
    }
}

// For handing progress to another thread
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMessage {
    pub generation: usize,
    pub best_fitness: f64,
    pub best_genome: Genome,
}

pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &Genome) {
        // A dropped receiver just means nobody is listening any more
        let _ = self.sender.send(ProgressMessage {
            generation,
            best_fitness,
            best_genome: *best_genome,
        });
    }
}
