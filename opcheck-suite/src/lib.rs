//! opcheck Suite
//!
//! End-to-end checks for the operation service: response assertions, schema
//! validation, the scenario catalog and the runner that produces a report.

pub mod assertions;
pub mod config;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod schema;

pub use config::Config;
pub use report::{Outcome, Report};
pub use runner::run_scenarios;
pub use scenario::{Scenario, ScenarioError, SuiteContext};
