//! Console trainer entry point.
//!
//! Composition root that assembles configuration, logging, and the scenario
//! director with a console effect handler, then drives the decision prompt
//! over stdin.
mod config;
mod console;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use config::ClientConfig;
use console::ConsoleHandler;
use scenario_core::DecisionState;
use scenario_runtime::ScenarioDirector;

/// Console host for tactical training scenarios.
#[derive(Parser)]
#[command(name = "trainer")]
#[command(about = "Run a tactical training scenario in the console", long_about = None)]
#[command(version)]
struct Cli {
    /// Scenario file to run (overrides SCENARIO_FILE).
    scenario: Option<String>,

    /// Load and interpret the scenario, print a summary, and exit.
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(scenario) = cli.scenario {
        config.scenario_file = scenario;
    }

    tracing::info!(
        dir = %config.scenario_dir.display(),
        file = %config.scenario_file,
        "starting trainer"
    );

    let mut director = ScenarioDirector::builder()
        .scenario_dir(config.scenario_dir)
        .handler(Box::new(ConsoleHandler))
        .build()?;

    let report = director.run(&config.scenario_file)?;

    if cli.validate {
        println!(
            "{}: {} environment(s), {} actor(s), decision pending: {}",
            config.scenario_file,
            report.environments_placed,
            report.actors_spawned,
            report.decision_pending
        );
        return Ok(());
    }

    // Forward stdin lines as option keys until the pending decision
    // resolves or input ends.
    let stdin = io::stdin();
    while director.decision_state() == DecisionState::AwaitingSelection {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        director.select_option(key)?;
    }

    Ok(())
}
