//! Commands module
//!
//! Defines all CLI commands and their handlers.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use opcheck_core::fake::Fake;
use opcheck_suite::{Config, Report, Scenario, SuiteContext, run_scenarios};
use tracing::info;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List scenarios
    List {
        /// Only scenarios whose name contains this text or carry this tag
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Run scenarios against the service
    Run {
        /// Only scenarios whose name contains this text or carry this tag
        #[arg(short, long)]
        filter: Option<String>,

        /// Print the report as JSON instead of the colored summary
        #[arg(long)]
        json: bool,
    },
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The validated suite configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::List { filter } => list_scenarios(filter.as_deref()),
        Commands::Run { filter, json } => run(config, filter.as_deref(), json).await,
    }
}

/// Print matching scenarios with their tags
fn list_scenarios(filter: Option<&str>) -> Result<()> {
    let scenarios = Scenario::matching(filter);

    if scenarios.is_empty() {
        println!("{}", "No scenarios match.".yellow());
        return Ok(());
    }

    println!("{}", format!("{} scenario(s):", scenarios.len()).bold());
    for scenario in scenarios {
        let tags: Vec<&str> = scenario.tags().iter().map(|t| t.as_str()).collect();
        println!(
            "  {} {} {}",
            "▸".cyan(),
            scenario.name(),
            format!("[{}]", tags.join(", ")).dimmed()
        );
    }

    Ok(())
}

/// Run matching scenarios and print the report
async fn run(config: &Config, filter: Option<&str>, json: bool) -> Result<()> {
    let scenarios = Scenario::matching(filter);
    if scenarios.is_empty() {
        anyhow::bail!("no scenarios match filter {:?}", filter.unwrap_or_default());
    }

    let fake = match config.seed {
        Some(seed) => {
            info!("Using fake data seed {}", seed);
            Fake::seeded(seed)
        }
        None => Fake::from_entropy(),
    };

    info!("Running against {}", config.base_url);
    let mut ctx = SuiteContext::new(config.build_client()?, fake, config.poll);
    let report = run_scenarios(&mut ctx, &scenarios).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }

    ensure_success(&report)
}

fn ensure_success(report: &Report) -> Result<()> {
    if !report.is_success() {
        anyhow::bail!("{} scenario(s) failed", report.failed());
    }
    Ok(())
}
