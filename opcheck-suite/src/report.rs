//! Run report
//!
//! Collects the outcome of each scenario and renders a summary.

use std::time::Duration;

use colored::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub title: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub duration_ms: u64,
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub scenarios: Vec<ScenarioReport>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: String, title: String, outcome: Outcome, duration: Duration) {
        self.scenarios.push(ScenarioReport {
            name,
            title,
            outcome,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        });
    }

    pub fn passed(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|s| s.outcome == Outcome::Passed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.scenarios.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Print a colored summary to stdout
    pub fn print(&self) {
        println!();
        for scenario in &self.scenarios {
            match &scenario.outcome {
                Outcome::Passed => println!(
                    "  {} {} {}",
                    "✓".green(),
                    scenario.name,
                    format!("({} ms)", scenario.duration_ms).dimmed()
                ),
                Outcome::Failed(reason) => {
                    println!(
                        "  {} {} {}",
                        "✗".red(),
                        scenario.name.bold(),
                        format!("({} ms)", scenario.duration_ms).dimmed()
                    );
                    println!("      {}", reason.red());
                }
            }
        }

        println!("{}", "─".repeat(80).dimmed());
        let summary = format!(
            "{} scenario(s): {} passed, {} failed",
            self.scenarios.len(),
            self.passed(),
            self.failed()
        );
        if self.is_success() {
            println!("{}", summary.green().bold());
        } else {
            println!("{}", summary.red().bold());
        }
    }
}
