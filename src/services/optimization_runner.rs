use crate::engines::generation::genome::Genome;
use crate::engines::generation::progress::ProgressCallback;
use crate::engines::generation::scenarios::{
    optimize_for_scenario, Scenario, ScenarioInputs, SCENARIO_GENERATIONS,
};
use crate::error::{OptimizerError, Result};
use crate::types::EvaluationResult;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Progress update from the optimization thread
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressUpdate {
    pub generation: usize,
    pub total_generations: usize,
    pub best_fitness: f64,
    pub best_genome: Genome,
    pub status: String,
}

/// Progress callback that sends updates through channel
struct RunnerProgressCallback {
    progress_tx: Sender<ProgressUpdate>,
    total_generations: usize,
}

impl ProgressCallback for RunnerProgressCallback {
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &Genome) {
        let _ = self.progress_tx.send(ProgressUpdate {
            generation,
            total_generations: self.total_generations,
            best_fitness,
            best_genome: *best_genome,
            status: format!(
                "Generation {}/{} - Best: {:.4}",
                generation + 1,
                self.total_generations,
                best_fitness
            ),
        });
    }
}

/// Runs one scenario optimization on a background thread.
///
/// The run itself is unchanged; only its location moves. There is no
/// cancellation: drop the runner and the thread finishes on its own.
pub struct OptimizationRunner {
    scenario: Scenario,
    handle: Option<JoinHandle<Result<EvaluationResult>>>,
    progress_rx: Receiver<ProgressUpdate>,
}

impl OptimizationRunner {
    /// Start the optimization in a background thread
    pub fn start(scenario: Scenario, inputs: ScenarioInputs) -> Result<Self> {
        let (progress_tx, progress_rx) = channel();

        let handle = thread::Builder::new()
            .name(format!("ubiopt-{}", scenario))
            .spawn(move || {
                log::debug!("Optimization thread started for scenario '{}'", scenario);
                let callback = RunnerProgressCallback {
                    progress_tx,
                    total_generations: SCENARIO_GENERATIONS,
                };
                optimize_for_scenario(scenario, &inputs, callback)
            })?;

        Ok(Self {
            scenario,
            handle: Some(handle),
            progress_rx,
        })
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Poll for progress updates (non-blocking)
    pub fn poll_progress(&self) -> Vec<ProgressUpdate> {
        self.progress_rx.try_iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |handle| handle.is_finished())
    }

    /// Result if the thread has finished, `None` while it is still running
    /// or once the result has already been taken
    pub fn try_get_result(&mut self) -> Option<Result<EvaluationResult>> {
        match self.handle.take() {
            Some(handle) if handle.is_finished() => Some(Self::join(handle)),
            Some(handle) => {
                // Not finished yet, put handle back
                self.handle = Some(handle);
                None
            }
            None => None,
        }
    }

    /// Block until the optimization finishes
    pub fn wait(mut self) -> Result<EvaluationResult> {
        match self.handle.take() {
            Some(handle) => Self::join(handle),
            None => Err(OptimizerError::Runner("Result was already taken".to_string())),
        }
    }

    fn join(handle: JoinHandle<Result<EvaluationResult>>) -> Result<EvaluationResult> {
        handle
            .join()
            .unwrap_or_else(|_| Err(OptimizerError::Runner("Optimization thread panicked".to_string())))
    }
}
