pub mod optimization_runner;

pub use optimization_runner::{OptimizationRunner, ProgressUpdate};
