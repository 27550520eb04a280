//! Scenario runner
//!
//! Runs scenarios one after another and records each outcome. A failing
//! scenario never stops the run.

use std::time::Instant;

use tracing::{error, info};

use crate::report::{Outcome, Report};
use crate::scenario::{Scenario, SuiteContext};

/// Run `scenarios` in order against the service behind `ctx`
pub async fn run_scenarios(ctx: &mut SuiteContext, scenarios: &[Scenario]) -> Report {
    let mut report = Report::new();

    info!("Running {} scenario(s)", scenarios.len());

    for scenario in scenarios {
        let name = scenario.name();
        info!("Starting scenario {}: {}", name, scenario.title());

        let started = Instant::now();
        let outcome = match scenario.run(ctx).await {
            Ok(()) => {
                info!("Scenario {} passed", name);
                Outcome::Passed
            }
            Err(e) => {
                error!("Scenario {} failed: {}", name, e);
                Outcome::Failed(e.to_string())
            }
        };

        report.record(name, scenario.title(), outcome, started.elapsed());
    }

    info!(
        "Finished: {} passed, {} failed",
        report.passed(),
        report.failed()
    );

    report
}
