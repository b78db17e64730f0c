use anyhow::{Context, Result};
use std::path::PathBuf;
use ubiopt::config::ConfigManager;
use ubiopt::engines::generation::progress::ConsoleProgressCallback;
use ubiopt::engines::generation::scenarios::{optimize_for_scenario, Scenario, ScenarioInputs};

const USAGE: &str = "usage: ubiopt <scenario> [config.toml]\n\
    scenarios: maximize_benefits, minimize_taxes, fiscal_balance, political_feasible";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scenario = args
        .next()
        .context(USAGE)?
        .parse::<Scenario>()
        .context("Failed to parse scenario")?;

    let manager = ConfigManager::new();
    if let Some(path) = args.next().map(PathBuf::from) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
    }
    let config = manager.get()?;

    let mut inputs = ScenarioInputs::new(config.inputs.population, config.inputs.economy)
        .with_assumptions(config.economics);
    inputs.locks = config.inputs.locks;
    inputs.current_genome = config.inputs.current_genome;
    inputs.seed = config.evolution.seed;

    let best = optimize_for_scenario(scenario, &inputs, ConsoleProgressCallback)
        .with_context(|| format!("Scenario '{}' failed", scenario))?;

    println!("{}", serde_json::to_string_pretty(&best)?);
    Ok(())
}
